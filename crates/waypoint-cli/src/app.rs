//! Application context.
//!
//! One explicit object owning the backend-bound store and preferences,
//! created once at startup and passed to every command. Nothing in the CLI
//! reaches for global mutable state.

use std::sync::Arc;

use anyhow::Context;

use waypoint_core::{EntryStore, JsonFileStore, Preferences};

pub struct App {
    pub store: EntryStore<Arc<JsonFileStore>>,
    pub prefs: Preferences<Arc<JsonFileStore>>,
    pub quiet: bool,
}

impl App {
    /// Open the journal file and wire the store and preferences to it.
    pub async fn open(journal_path: &str, quiet: bool) -> anyhow::Result<Self> {
        let backend = Arc::new(
            JsonFileStore::open(journal_path)
                .await
                .with_context(|| format!("cannot open journal at {}", journal_path))?,
        );

        Ok(Self {
            store: EntryStore::new(backend.clone()),
            prefs: Preferences::new(backend),
            quiet,
        })
    }

    /// Track the app open and greet on first launch.
    pub async fn record_launch(&self) {
        let opens = self.prefs.record_open().await;
        if self.prefs.first_launch().await {
            if !self.quiet {
                println!("Welcome to Waypoint! Your journal is ready.");
            }
            self.prefs.mark_launched().await;
        }
        log::debug!("app open #{}", opens);
    }
}
