//! # Waypoint Core
//!
//! Core library for Waypoint - a travel photo journal. Each journal entry
//! pairs a captured photo with a geolocation, a reverse-geocoded address and
//! free-form notes, persisted as a single chronological collection.
//!
//! This crate provides the entry model, schema validation, the key-value
//! persistence abstraction and the entry store, independent of any user
//! interface.
//!
//! ## Architecture
//!
//! - **storage**: Key-value backend trait and implementations
//! - **entry**: The `TravelEntry` data model
//! - **validate**: Shallow schema checks over decoded JSON
//! - **store**: The entry store (the single source of truth for entries)
//! - **prefs**: Theme and launch-tracking preferences
//!
//! The store is deliberately local-only: single process, single user, no
//! sync, no encryption at rest. The backend is the sole source of truth;
//! every operation round-trips through it and mutations verify their own
//! effect by re-reading.

pub mod entry;
pub mod error;
pub mod fs;
pub mod keys;
pub mod prefs;
pub mod storage;
pub mod store;
pub mod validate;

pub use entry::TravelEntry;
pub use error::{Result, StoreError};
pub use prefs::{Preferences, Theme};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
pub use store::{EntryStore, StoreDiagnostics};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
