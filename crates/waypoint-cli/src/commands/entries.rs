//! Entry commands: add, list, show, edit, remove.

use anyhow::{anyhow, bail};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use waypoint_core::TravelEntry;

use crate::app::App;
use crate::cli::{AddArgs, EditArgs, ListArgs, RemoveArgs, ShowArgs};

pub async fn add(app: &App, args: AddArgs) -> anyhow::Result<()> {
    let mut entry = TravelEntry::new(
        Uuid::new_v4().to_string(),
        args.image_uri,
        args.address,
        args.latitude,
        args.longitude,
    );
    if let Some(date) = args.date {
        entry = entry.with_created_at(parse_created_at(&date)?);
    }
    if let Some(title) = args.title {
        entry = entry.with_title(title);
    }
    if let Some(notes) = args.notes {
        entry = entry.with_notes(notes);
    }
    if !args.tag.is_empty() {
        entry = entry.with_tags(args.tag);
    }
    if let Some(raw) = args.weather {
        entry = entry.with_weather(parse_weather(&raw)?);
    }

    let id = entry.id.clone();
    if !app.store.save(entry).await {
        bail!("Entry was not saved (see logs for details)");
    }
    if !app.quiet {
        println!("Added entry {}", id);
    }
    Ok(())
}

pub async fn list(app: &App, args: ListArgs) -> anyhow::Result<()> {
    let mut entries = app.store.list().await;
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        if !app.quiet {
            println!("No entries found.");
        }
        return Ok(());
    }

    if !app.quiet {
        println!("ID | CREATED_AT | ADDRESS | TITLE");
    }
    for entry in entries {
        println!(
            "{} | {} | {} | {}",
            entry.id,
            format_timestamp(entry.created_at),
            entry.address,
            entry.title.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

pub async fn show(app: &App, args: ShowArgs) -> anyhow::Result<()> {
    let entry = app
        .store
        .get_by_id(&args.id)
        .await
        .ok_or_else(|| anyhow!("Entry not found"))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
        return Ok(());
    }

    println!("ID: {}", entry.id);
    println!("Created: {}", format_timestamp(entry.created_at));
    println!("Address: {}", entry.address);
    println!(
        "Location: {:.5}, {:.5}",
        entry.latitude, entry.longitude
    );
    println!("Photo: {}", entry.image_uri);
    if let Some(title) = &entry.title {
        println!("Title: {}", title);
    }
    if let Some(tags) = &entry.tags {
        println!("Tags: {}", tags.join(", "));
    }
    if let Some(weather) = &entry.weather {
        println!("Weather: {}", weather);
    }
    if let Some(notes) = &entry.notes {
        println!();
        println!("{}", notes);
    }
    Ok(())
}

pub async fn edit(app: &App, args: EditArgs) -> anyhow::Result<()> {
    let mut entry = app
        .store
        .get_by_id(&args.id)
        .await
        .ok_or_else(|| anyhow!("Entry not found"))?;

    if let Some(title) = args.title {
        entry.title = Some(title);
    }
    if let Some(notes) = args.notes {
        entry.notes = Some(notes);
    }
    if let Some(address) = args.address {
        entry.address = address;
    }
    if !args.tag.is_empty() {
        entry.tags = Some(args.tag);
    }
    if let Some(raw) = args.weather {
        entry.weather = Some(parse_weather(&raw)?);
    }

    if !app.store.update(entry).await {
        bail!("Entry was not updated (see logs for details)");
    }
    if !app.quiet {
        println!("Updated entry {}", args.id);
    }
    Ok(())
}

pub async fn remove(app: &App, args: RemoveArgs) -> anyhow::Result<()> {
    if !app.store.remove(&args.id).await {
        bail!("Entry was not removed (unknown id, or see logs)");
    }
    if !app.quiet {
        println!("Removed entry {}", args.id);
    }
    Ok(())
}

fn parse_created_at(value: &str) -> anyhow::Result<i64> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc).timestamp_millis());
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let naive = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow!("Invalid date value: {}", value))?;
        return Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc).timestamp_millis());
    }

    Err(anyhow!(
        "Invalid date/time (expected ISO-8601 or YYYY-MM-DD): {}",
        value
    ))
}

fn parse_weather(raw: &str) -> anyhow::Result<serde_json::Value> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| anyhow!("Invalid weather JSON: {}", e))?;
    if !value.is_object() {
        bail!("Weather must be a JSON object");
    }
    Ok(value)
}

fn format_timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| millis.to_string())
}
