//! The persistent entry store.
//!
//! Single source of truth for reading, writing and maintaining integrity of
//! the travel-entry collection. There is no in-memory cache: every operation
//! round-trips through the key-value backend, and every mutation re-reads
//! the backend afterwards to confirm the expected post-condition before
//! reporting success ("trust but verify" against a backend whose write ack
//! does not guarantee visibility).
//!
//! No error crosses the public boundary. Backend faults, schema rejections
//! and failed verifications are logged with operation context and surfaced
//! as the operation's ordinary failure value (`false`, empty, `None`), so
//! callers only ever branch on results.
//!
//! There is deliberately no mutual exclusion around the read-modify-write
//! sequence: two racing mutations can lose an update, matching the behavior
//! of the app this store backs. See `tests/entry_store.rs` for a
//! demonstration.

use chrono::Utc;
use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::entry::TravelEntry;
use crate::error::Result;
use crate::keys::ENTRIES_KEY;
use crate::storage::KeyValueStore;
use crate::validate::{check_entries, check_entry};

/// Persistent store for the travel-entry collection.
pub struct EntryStore<S: KeyValueStore> {
    backend: S,
}

/// Snapshot of what the backend currently holds under the entries key.
#[derive(Debug, Clone, Serialize)]
pub struct StoreDiagnostics {
    /// Whether any payload is present under the entries key
    pub present: bool,
    /// Raw payload size in bytes
    pub bytes: usize,
    /// Number of elements the payload decodes to (0 when undecodable)
    pub entries: usize,
    /// Whether the payload passes the collection schema check
    pub valid: bool,
}

impl<S: KeyValueStore> EntryStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// All entries, newest first by `createdAt`.
    ///
    /// An absent collection key means "no entries yet" and yields an empty
    /// list. A payload that fails decoding or the schema check is treated
    /// as corrupted storage: logged, and degraded to an empty list rather
    /// than failing the caller.
    pub async fn list(&self) -> Vec<TravelEntry> {
        match self.load().await {
            Ok(mut entries) => {
                entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                entries
            }
            Err(err) => {
                warn!("list: backend read failed: {}", err);
                Vec::new()
            }
        }
    }

    /// The entry with the given id, if present.
    pub async fn get_by_id(&self, id: &str) -> Option<TravelEntry> {
        self.list().await.into_iter().find(|entry| entry.id == id)
    }

    /// Persist a new entry at the end of the collection.
    ///
    /// The entry must pass the schema check. If its id already exists in
    /// the collection, a fresh id (current timestamp millis plus a random
    /// suffix) is silently substituted before insertion; the existing entry
    /// is left untouched. Returns `true` only once a re-read confirms the
    /// new entry is visible.
    pub async fn save(&self, mut entry: TravelEntry) -> bool {
        if !self.admit("save", &entry) {
            return false;
        }

        let mut entries = match self.load().await {
            Ok(entries) => entries,
            Err(err) => {
                warn!("save: backend read failed: {}", err);
                return false;
            }
        };

        if entries.iter().any(|existing| existing.id == entry.id) {
            let replacement = regenerated_id(&entries);
            debug!(
                "save: id {} already present, regenerated as {}",
                entry.id, replacement
            );
            entry.id = replacement;
        }

        let saved_id = entry.id.clone();
        entries.push(entry);
        if let Err(err) = self.write(&entries).await {
            warn!("save: backend write failed: {}", err);
            return false;
        }

        match self.load().await {
            Ok(after) if after.iter().any(|entry| entry.id == saved_id) => true,
            Ok(_) => {
                warn!("save: entry {} not visible after write", saved_id);
                false
            }
            Err(err) => {
                warn!("save: verification read failed: {}", err);
                false
            }
        }
    }

    /// Replace the entry with the same id, preserving its position.
    ///
    /// There are no upsert semantics: an unknown id returns `false` and
    /// leaves the collection unchanged. Verification confirms an entry with
    /// matching id and `createdAt` exists after the write.
    pub async fn update(&self, entry: TravelEntry) -> bool {
        if !self.admit("update", &entry) {
            return false;
        }

        let mut entries = match self.load().await {
            Ok(entries) => entries,
            Err(err) => {
                warn!("update: backend read failed: {}", err);
                return false;
            }
        };

        let Some(index) = entries.iter().position(|existing| existing.id == entry.id) else {
            warn!("update: no entry with id {}", entry.id);
            return false;
        };

        let (id, created_at) = (entry.id.clone(), entry.created_at);
        entries[index] = entry;
        if let Err(err) = self.write(&entries).await {
            warn!("update: backend write failed: {}", err);
            return false;
        }

        match self.load().await {
            Ok(after)
                if after
                    .iter()
                    .any(|entry| entry.id == id && entry.created_at == created_at) =>
            {
                true
            }
            Ok(_) => {
                warn!("update: entry {} not visible after write", id);
                false
            }
            Err(err) => {
                warn!("update: verification read failed: {}", err);
                false
            }
        }
    }

    /// Remove the entry with the given id.
    ///
    /// Returns `false` for an empty id or an id not in the collection (the
    /// collection is left unchanged). Verification confirms no entry with
    /// the id remains.
    pub async fn remove(&self, id: &str) -> bool {
        if id.is_empty() {
            warn!("remove: empty id");
            return false;
        }

        let mut entries = match self.load().await {
            Ok(entries) => entries,
            Err(err) => {
                warn!("remove: backend read failed: {}", err);
                return false;
            }
        };

        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            debug!("remove: no entry with id {}", id);
            return false;
        }

        if let Err(err) = self.write(&entries).await {
            warn!("remove: backend write failed: {}", err);
            return false;
        }

        match self.load().await {
            Ok(after) if !after.iter().any(|entry| entry.id == id) => true,
            Ok(_) => {
                warn!("remove: entry {} still visible after write", id);
                false
            }
            Err(err) => {
                warn!("remove: verification read failed: {}", err);
                false
            }
        }
    }

    /// Remove the entire collection.
    ///
    /// Verification confirms the collection reads back empty.
    pub async fn clear(&self) -> bool {
        if let Err(err) = self.backend.remove(ENTRIES_KEY).await {
            warn!("clear: backend remove failed: {}", err);
            return false;
        }

        match self.load().await {
            Ok(after) if after.is_empty() => true,
            Ok(after) => {
                warn!("clear: {} entries still visible after remove", after.len());
                false
            }
            Err(err) => {
                warn!("clear: verification read failed: {}", err);
                false
            }
        }
    }

    /// Number of entries currently stored.
    pub async fn count(&self) -> usize {
        self.list().await.len()
    }

    /// Inspect the raw stored collection without altering it.
    pub async fn diagnostics(&self) -> StoreDiagnostics {
        let raw = match self.backend.get(ENTRIES_KEY).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!("diagnostics: backend read failed: {}", err);
                None
            }
        };

        let Some(raw) = raw else {
            return StoreDiagnostics {
                present: false,
                bytes: 0,
                entries: 0,
                valid: true,
            };
        };

        let bytes = raw.len();
        let Ok(decoded) = serde_json::from_str::<Value>(&raw) else {
            return StoreDiagnostics {
                present: true,
                bytes,
                entries: 0,
                valid: false,
            };
        };

        let entries = decoded.as_array().map(Vec::len).unwrap_or(0);
        let valid = check_entries(&decoded).is_ok();
        StoreDiagnostics {
            present: true,
            bytes,
            entries,
            valid,
        }
    }

    /// Run the schema check on an entry handed in by a caller.
    fn admit(&self, op: &str, entry: &TravelEntry) -> bool {
        let value = match serde_json::to_value(entry) {
            Ok(value) => value,
            Err(err) => {
                warn!("{}: entry not serializable: {}", op, err);
                return false;
            }
        };
        if let Err(violation) = check_entry(&value) {
            warn!("{}: entry rejected: {}", op, violation);
            return false;
        }
        true
    }

    /// Read the collection in its stored (insertion) order.
    ///
    /// Only a backend fault is an error here. An undecodable or
    /// schema-invalid payload is corrupted storage and degrades to an
    /// empty collection, which a subsequent write will replace wholesale.
    async fn load(&self) -> Result<Vec<TravelEntry>> {
        let Some(raw) = self.backend.get(ENTRIES_KEY).await? else {
            return Ok(Vec::new());
        };

        let decoded: Value = match serde_json::from_str(&raw) {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!("stored collection is not valid JSON: {}", err);
                return Ok(Vec::new());
            }
        };

        if check_entries(&decoded).is_err() {
            // Already logged field-by-field by the validator.
            warn!("stored collection failed schema check, treating as empty");
            return Ok(Vec::new());
        }

        match serde_json::from_value(decoded) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                warn!("stored collection failed decoding: {}", err);
                Ok(Vec::new())
            }
        }
    }

    async fn write(&self, entries: &[TravelEntry]) -> Result<()> {
        let payload = serde_json::to_string(entries)?;
        self.backend.set(ENTRIES_KEY, &payload).await
    }
}

/// A fresh id for a colliding save: timestamp millis plus a random suffix,
/// re-rolled until it is unique within the collection.
fn regenerated_id(existing: &[TravelEntry]) -> String {
    loop {
        let suffix = Uuid::new_v4().simple().to_string();
        let candidate = format!("{}-{}", Utc::now().timestamp_millis(), &suffix[..8]);
        if !existing.iter().any(|entry| entry.id == candidate) {
            return candidate;
        }
    }
}
