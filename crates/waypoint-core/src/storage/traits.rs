//! Key-value backend trait definition.
//!
//! The `KeyValueStore` trait defines the interface every persistence
//! backend must implement. The entry store treats the backend as the sole
//! source of truth: it assumes writes are atomic per key, durable once
//! acknowledged, and that there are no transactions across keys.

use async_trait::async_trait;

use crate::error::Result;

/// Asynchronous string-keyed durable map.
///
/// All implementations must ensure:
/// - Values are UTF-8 strings
/// - A write to one key is atomic (readers see the old or new value, never
///   a partial one)
/// - `get` after an acknowledged `set` returns the written value
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(value))` if present, `Ok(None)` if the key has
    /// never been written or was removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the underlying storage cannot be
    /// read.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the write cannot be persisted.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` and its value. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the removal cannot be persisted.
    async fn remove(&self, key: &str) -> Result<()>;
}

// Sharing one backend between the entry store and preferences only needs
// a delegating impl on Arc.
#[async_trait]
impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key).await
    }
}
