//! Storage key constants.
//!
//! These are the string keys under which the app persists its state in the
//! key-value backend. They are part of the on-disk format and must stay
//! stable across versions.

/// The full entry collection, serialized as one JSON array.
pub const ENTRIES_KEY: &str = "travel_entries";

/// The preferred UI theme.
pub const THEME_KEY: &str = "theme_preference";

/// Flag set after the first launch has completed.
pub const FIRST_LAUNCH_KEY: &str = "first_launch_done";

/// Running count of app opens.
pub const OPEN_COUNT_KEY: &str = "app_open_count";
