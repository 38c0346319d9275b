//! Entry schema validation.
//!
//! Shallow, field-by-field checks over decoded JSON, used both on entries
//! handed to the store and on whatever comes back out of the backend. The
//! checks are intentionally no deeper than the shape the app relies on:
//! numeric ranges are not validated and the `weather` object's internals are
//! not inspected. Every rejection names the offending field and is logged,
//! so a corrupted collection can be diagnosed from the logs alone.

use log::warn;
use serde_json::Value;
use thiserror::Error;

/// A reason an entry (or entry collection) fails the schema check.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaViolation {
    /// The value is not a JSON object
    #[error("entry is not a JSON object")]
    NotAnObject,

    /// A required field is absent
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A field is present with the wrong JSON type
    #[error("field `{field}` must be a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    /// The collection payload is not a JSON array
    #[error("entry collection is not a JSON array")]
    NotAnArray,

    /// An element of the collection fails the entry check
    #[error("entry at index {index}: {violation}")]
    Element {
        index: usize,
        violation: Box<SchemaViolation>,
    },
}

/// Required fields and the JSON type each must carry.
const REQUIRED_FIELDS: &[(&str, &str)] = &[
    ("id", "string"),
    ("imageUri", "string"),
    ("address", "string"),
    ("latitude", "number"),
    ("longitude", "number"),
    ("createdAt", "number"),
];

/// Optional fields and the JSON type each must carry when present.
const OPTIONAL_FIELDS: &[(&str, &str)] = &[
    ("title", "string"),
    ("notes", "string"),
    ("tags", "array"),
    ("weather", "object"),
];

fn has_type(value: &Value, expected: &str) -> bool {
    match expected {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        _ => false,
    }
}

/// Check a decoded JSON value against the travel-entry schema.
///
/// # Errors
///
/// Returns the first [`SchemaViolation`] encountered: not an object, a
/// missing or mistyped required field, or a mistyped optional field. The
/// violation is also logged at warn level.
pub fn check_entry(value: &Value) -> Result<(), SchemaViolation> {
    let Some(object) = value.as_object() else {
        let violation = SchemaViolation::NotAnObject;
        warn!("entry rejected: {}", violation);
        return Err(violation);
    };

    for &(field, expected) in REQUIRED_FIELDS {
        match object.get(field) {
            None => {
                let violation = SchemaViolation::MissingField(field);
                warn!("entry rejected: {}", violation);
                return Err(violation);
            }
            Some(found) if !has_type(found, expected) => {
                let violation = SchemaViolation::WrongType { field, expected };
                warn!("entry rejected: {}", violation);
                return Err(violation);
            }
            Some(_) => {}
        }
    }

    for &(field, expected) in OPTIONAL_FIELDS {
        if let Some(found) = object.get(field) {
            if !has_type(found, expected) {
                let violation = SchemaViolation::WrongType { field, expected };
                warn!("entry rejected: {}", violation);
                return Err(violation);
            }
        }
    }

    Ok(())
}

/// Check a decoded JSON value as a collection of travel entries.
///
/// # Errors
///
/// Returns [`SchemaViolation::NotAnArray`] when the payload is not an
/// array, or [`SchemaViolation::Element`] wrapping the first failing
/// element's violation.
pub fn check_entries(value: &Value) -> Result<(), SchemaViolation> {
    let Some(elements) = value.as_array() else {
        let violation = SchemaViolation::NotAnArray;
        warn!("entry collection rejected: {}", violation);
        return Err(violation);
    };

    for (index, element) in elements.iter().enumerate() {
        if let Err(violation) = check_entry(element) {
            let wrapped = SchemaViolation::Element {
                index,
                violation: Box::new(violation),
            };
            warn!("entry collection rejected: {}", wrapped);
            return Err(wrapped);
        }
    }

    Ok(())
}
