//! Single-file JSON key-value backend.
//!
//! The whole key map is one JSON object in one file. The map is read once
//! when the store is opened; every mutation rewrites the file atomically
//! (temp file, fsync, rename) so a crash mid-write leaves the previous
//! contents intact. Per-key writes are therefore atomic, which is all the
//! entry store assumes.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, MutexGuard};

use crate::error::{Result, StoreError};
use crate::fs::replace_file;
use crate::storage::traits::KeyValueStore;

/// Durable backend persisting all keys to a single JSON file.
pub struct JsonFileStore {
    path: PathBuf,
    map: Mutex<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating an empty map if the file does
    /// not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the file exists but cannot be
    /// read, or `StoreError::Decode` if its contents are not a JSON
    /// object of strings.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let map = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                StoreError::Decode(format!("journal file {}: {}", path.display(), e))
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                return Err(StoreError::Backend(format!(
                    "cannot read journal file {}: {}",
                    path.display(),
                    err
                )))
            }
        };

        Ok(Self {
            path,
            map: Mutex::new(map),
        })
    }

    /// Path this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, map: &HashMap<String, String>) -> Result<()> {
        let payload = serde_json::to_string_pretty(map)
            .map_err(|e| StoreError::Backend(format!("serialize key map failed: {}", e)))?;

        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| StoreError::Backend(format!("system time error: {}", e)))?
            .as_nanos();
        let filename = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| StoreError::Backend("invalid journal filename".to_string()))?;
        let temp_path = parent.join(format!("{}.{}.tmp", filename, nanos));

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
            .await
            .map_err(|e| StoreError::Backend(format!("temp file create failed: {}", e)))?;
        file.write_all(payload.as_bytes())
            .await
            .map_err(|e| StoreError::Backend(format!("temp file write failed: {}", e)))?;
        file.sync_all()
            .await
            .map_err(|e| StoreError::Backend(format!("temp file sync failed: {}", e)))?;
        drop(file);

        replace_file(&temp_path, &self.path)
            .map_err(|e| StoreError::Backend(format!("atomic rename failed: {}", e)))?;

        Ok(())
    }

    async fn lock_map(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.map.lock().await
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock_map().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut guard = self.lock_map().await;
        // Persist a candidate map first so an I/O failure leaves the
        // in-memory view matching what is on disk.
        let mut next = guard.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next).await?;
        *guard = next;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut guard = self.lock_map().await;
        if !guard.contains_key(key) {
            return Ok(());
        }
        let mut next = guard.clone();
        next.remove(key);
        self.persist(&next).await?;
        *guard = next;
        Ok(())
    }
}
