//! Maintenance commands: clear, count, doctor, theme.

use anyhow::bail;

use waypoint_core::Theme;

use crate::app::App;
use crate::cli::{ClearArgs, DoctorArgs, ThemeArgs};

pub async fn clear(app: &App, args: ClearArgs) -> anyhow::Result<()> {
    if !args.yes {
        bail!("Refusing to delete all entries without --yes");
    }
    if !app.store.clear().await {
        bail!("Journal was not cleared (see logs for details)");
    }
    if !app.quiet {
        println!("All entries removed.");
    }
    Ok(())
}

pub async fn count(app: &App) -> anyhow::Result<()> {
    println!("{}", app.store.count().await);
    Ok(())
}

pub async fn doctor(app: &App, args: DoctorArgs) -> anyhow::Result<()> {
    let report = app.store.diagnostics().await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Entry collection:");
    println!("- present: {}", if report.present { "yes" } else { "no" });
    println!("- size: {} bytes", report.bytes);
    println!("- entries: {}", report.entries);
    println!(
        "- schema: {}",
        if report.valid { "OK" } else { "INVALID" }
    );

    if !report.valid {
        bail!("Stored collection is corrupted; reads will degrade to an empty list");
    }
    Ok(())
}

pub async fn theme(app: &App, args: ThemeArgs) -> anyhow::Result<()> {
    match args.set {
        None => {
            println!("{}", app.prefs.theme().await);
        }
        Some(raw) => {
            let theme = match raw.as_str() {
                "light" => Theme::Light,
                "dark" => Theme::Dark,
                "system" => Theme::System,
                other => bail!("Unknown theme: {} (use light, dark or system)", other),
            };
            if !app.prefs.set_theme(theme).await {
                bail!("Theme was not saved (see logs for details)");
            }
            if !app.quiet {
                println!("Theme set to {}", theme);
            }
        }
    }
    Ok(())
}
