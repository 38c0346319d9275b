//! Waypoint CLI - a travel photo journal in your terminal.
//!
//! The command layer is presentation glue: it turns arguments into
//! `TravelEntry` values and store calls, and maps failure returns into
//! messages and exit codes. All persistence semantics live in
//! `waypoint-core`.

mod app;
mod cli;
mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use app::App;
use cli::{Cli, Commands};
use waypoint_core::VERSION;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Keep the handle alive for the life of the process.
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")
        .map_err(|e| anyhow::anyhow!("invalid RUST_LOG value: {}", e))?
        .log_to_stderr()
        .start()
        .map_err(|e| anyhow::anyhow!("failed to start logger: {}", e))?;

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Waypoint v{}", VERSION);
        println!("\nRun `waypoint --help` for usage information.");
        return Ok(());
    };

    if let Commands::Completions(args) = &command {
        let mut cmd = Cli::command();
        generate(args.shell, &mut cmd, "waypoint", &mut std::io::stdout());
        return Ok(());
    }

    let journal = cli.journal.ok_or_else(|| {
        anyhow::anyhow!("No journal path provided. Use --journal or set WAYPOINT_JOURNAL.")
    })?;
    let app = App::open(&journal, cli.quiet).await?;
    app.record_launch().await;

    match command {
        Commands::Add(args) => commands::entries::add(&app, args).await,
        Commands::List(args) => commands::entries::list(&app, args).await,
        Commands::Show(args) => commands::entries::show(&app, args).await,
        Commands::Edit(args) => commands::entries::edit(&app, args).await,
        Commands::Remove(args) => commands::entries::remove(&app, args).await,
        Commands::Clear(args) => commands::maintenance::clear(&app, args).await,
        Commands::Count => commands::maintenance::count(&app).await,
        Commands::Theme(args) => commands::maintenance::theme(&app, args).await,
        Commands::Doctor(args) => commands::maintenance::doctor(&app, args).await,
        Commands::Completions(_) => unreachable!("handled before opening the journal"),
    }
}
