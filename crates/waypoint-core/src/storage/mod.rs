//! Key-value persistence backends.
//!
//! The entry store is built entirely on the [`KeyValueStore`] trait: an
//! asynchronous, string-keyed durable map with per-key atomic writes and no
//! cross-key transactions. Two implementations ship with the crate: an
//! in-memory map for tests and scratch use, and a single-file JSON map for
//! real persistence.

mod json_file;
mod memory;
mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
