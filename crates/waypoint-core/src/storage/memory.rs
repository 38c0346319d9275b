//! In-memory key-value backend.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::{Result, StoreError};
use crate::storage::traits::KeyValueStore;

/// Non-durable backend backed by a mutex-guarded map.
///
/// Useful for tests and as a scratch store; contents are lost when the
/// value is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the map, returning an error if the mutex is poisoned.
    fn lock_map(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.map
            .lock()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock_map()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock_map()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.lock_map()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove_round_trip() {
        let backend = MemoryStore::new();

        assert_eq!(backend.get("k").await.expect("get"), None);

        backend.set("k", "v").await.expect("set");
        assert_eq!(backend.get("k").await.expect("get"), Some("v".to_string()));

        backend.set("k", "v2").await.expect("overwrite");
        assert_eq!(backend.get("k").await.expect("get"), Some("v2".to_string()));

        backend.remove("k").await.expect("remove");
        assert_eq!(backend.get("k").await.expect("get"), None);

        // Removing an absent key is fine.
        backend.remove("k").await.expect("remove absent");
    }
}
