//! The travel entry data model.
//!
//! A `TravelEntry` is the sole persisted entity: one captured photo plus the
//! location it was taken at and whatever the user wrote about it. The wire
//! format is a JSON object with camelCase field names; the full collection
//! is a JSON array of these objects under a single storage key.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One travel journal entry.
///
/// `id` is the sole identity key and is immutable after creation (the store
/// may regenerate it once, before insertion, if the requested id collides).
/// `created_at` is milliseconds since the Unix epoch and is the sole sort
/// key: collections are always returned newest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelEntry {
    /// Unique identifier within the collection
    pub id: String,

    /// Reference to the locally stored photo
    pub image_uri: String,

    /// Human-readable location description (reverse-geocoded)
    pub address: String,

    /// Latitude in degrees (not range-checked)
    pub latitude: f64,

    /// Longitude in degrees (not range-checked)
    pub longitude: f64,

    /// Creation time, milliseconds since epoch
    pub created_at: i64,

    /// Optional title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Optional free-text notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Optional ordered tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Optional weather snapshot (free-form object: conditions,
    /// temperature, humidity, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<serde_json::Value>,
}

impl TravelEntry {
    /// Create an entry with the required fields, timestamped now.
    pub fn new(
        id: impl Into<String>,
        image_uri: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            image_uri: image_uri.into(),
            address: address.into(),
            latitude,
            longitude,
            created_at: Utc::now().timestamp_millis(),
            title: None,
            notes: None,
            tags: None,
            weather: None,
        }
    }

    pub fn with_created_at(mut self, millis: i64) -> Self {
        self.created_at = millis;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_weather(mut self, weather: serde_json::Value) -> Self {
        self.weather = Some(weather);
        self
    }
}
