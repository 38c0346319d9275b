//! Error types for Waypoint core operations.
//!
//! These errors stay inside the core: the entry store catches every one of
//! them at its public boundary and converts it into the operation's normal
//! failure return (false / empty / `None`). Backends and internal helpers
//! use them to describe what went wrong for the logs.

use thiserror::Error;

/// Result type alias for Waypoint operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Core error type for Waypoint operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Key-value backend fault (I/O, lock poisoning, unavailable storage)
    #[error("Backend error: {0}")]
    Backend(String),

    /// Persisted payload could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Input failed the entry schema check
    #[error("Validation error: {0}")]
    Validation(String),

    /// Target entry does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Post-write re-read did not confirm the expected state
    #[error("Verification failed: {0}")]
    Verification(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}
