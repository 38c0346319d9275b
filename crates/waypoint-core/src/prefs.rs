//! App preferences persisted alongside the entry collection.
//!
//! Owns the three non-entry storage keys: the UI theme, the first-launch
//! flag and the app-open counter. Follows the same fail-soft policy as the
//! entry store: backend faults are logged and a safe default is returned,
//! never an error.

use std::fmt;

use log::warn;

use crate::keys::{FIRST_LAUNCH_KEY, OPEN_COUNT_KEY, THEME_KEY};
use crate::storage::KeyValueStore;

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Parse a stored theme name; anything unrecognized falls back to the
    /// default with a warning.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            "system" => Theme::System,
            other => {
                warn!("unknown stored theme {:?}, using default", other);
                Theme::default()
            }
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preference accessors over the key-value backend.
pub struct Preferences<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// The stored theme, or the default when unset, unreadable or unknown.
    pub async fn theme(&self) -> Theme {
        match self.backend.get(THEME_KEY).await {
            Ok(Some(raw)) => Theme::parse_or_default(&raw),
            Ok(None) => Theme::default(),
            Err(err) => {
                warn!("theme: backend read failed: {}", err);
                Theme::default()
            }
        }
    }

    /// Persist the theme. Returns `true` once a re-read confirms it.
    pub async fn set_theme(&self, theme: Theme) -> bool {
        if let Err(err) = self.backend.set(THEME_KEY, theme.as_str()).await {
            warn!("set_theme: backend write failed: {}", err);
            return false;
        }
        match self.backend.get(THEME_KEY).await {
            Ok(Some(raw)) if raw == theme.as_str() => true,
            Ok(_) => {
                warn!("set_theme: theme not visible after write");
                false
            }
            Err(err) => {
                warn!("set_theme: verification read failed: {}", err);
                false
            }
        }
    }

    /// Whether this is the first launch (the flag has never been set).
    ///
    /// A backend fault reports `false` so a transient glitch does not
    /// re-trigger onboarding.
    pub async fn first_launch(&self) -> bool {
        match self.backend.get(FIRST_LAUNCH_KEY).await {
            Ok(None) => true,
            Ok(Some(_)) => false,
            Err(err) => {
                warn!("first_launch: backend read failed: {}", err);
                false
            }
        }
    }

    /// Record that the first launch has completed.
    pub async fn mark_launched(&self) -> bool {
        if let Err(err) = self.backend.set(FIRST_LAUNCH_KEY, "true").await {
            warn!("mark_launched: backend write failed: {}", err);
            return false;
        }
        true
    }

    /// Increment and return the app-open counter.
    ///
    /// A missing or non-numeric stored value restarts the count at 1. A
    /// backend fault returns 0.
    pub async fn record_open(&self) -> u64 {
        let current = match self.backend.get(OPEN_COUNT_KEY).await {
            Ok(raw) => raw.and_then(|raw| raw.parse::<u64>().ok()).unwrap_or(0),
            Err(err) => {
                warn!("record_open: backend read failed: {}", err);
                return 0;
            }
        };

        let next = current.saturating_add(1);
        if let Err(err) = self.backend.set(OPEN_COUNT_KEY, &next.to_string()).await {
            warn!("record_open: backend write failed: {}", err);
            return 0;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[tokio::test]
    async fn test_theme_round_trip_and_default() {
        let prefs = Preferences::new(MemoryStore::new());

        assert_eq!(prefs.theme().await, Theme::System);
        assert!(prefs.set_theme(Theme::Dark).await);
        assert_eq!(prefs.theme().await, Theme::Dark);
    }

    #[tokio::test]
    async fn test_unknown_stored_theme_degrades_to_default() {
        let backend = MemoryStore::new();
        backend
            .set(THEME_KEY, "solarized")
            .await
            .expect("seed theme");
        let prefs = Preferences::new(backend);
        assert_eq!(prefs.theme().await, Theme::System);
    }

    #[tokio::test]
    async fn test_first_launch_flag() {
        let prefs = Preferences::new(MemoryStore::new());

        assert!(prefs.first_launch().await);
        assert!(prefs.mark_launched().await);
        assert!(!prefs.first_launch().await);
    }

    #[tokio::test]
    async fn test_open_counter_increments() {
        let prefs = Preferences::new(MemoryStore::new());

        assert_eq!(prefs.record_open().await, 1);
        assert_eq!(prefs.record_open().await, 2);
        assert_eq!(prefs.record_open().await, 3);
    }

    #[tokio::test]
    async fn test_open_counter_resets_on_garbage() {
        let backend = MemoryStore::new();
        backend
            .set(OPEN_COUNT_KEY, "not-a-number")
            .await
            .expect("seed counter");
        let prefs = Preferences::new(backend);
        assert_eq!(prefs.record_open().await, 1);
    }
}
