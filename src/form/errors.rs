//! Per-field validation messages.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::FieldName;

/// A validation failure attached to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Count is not a number or not above zero
    NotPositive,
    /// Per-row width is not a number or below one
    PerRowTooSmall,
    /// Prefix is empty after trimming
    EmptyPrefix,
    /// Field left empty at generation time
    Required,
    /// Per-row width is larger than the token count
    PerRowExceedsTotal,
    /// Count is above the configured maximum
    TooMany {
        /// Largest accepted count
        max: usize,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive => f.write_str("Must be a positive number"),
            Self::PerRowTooSmall => f.write_str("Must be a number greater than 0"),
            Self::EmptyPrefix => f.write_str("Prefix cannot be empty"),
            Self::Required => f.write_str("This field is required"),
            Self::PerRowExceedsTotal => {
                f.write_str("Tokens per row cannot exceed the total number of tokens")
            }
            Self::TooMany { max } => write!(f, "Must be no more than {max}"),
        }
    }
}

/// Sparse map of field errors. A field missing from the map has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<FieldName, FieldError>,
}

impl FieldErrors {
    /// Creates an empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Error for a field, if any.
    #[must_use]
    pub fn get(&self, field: FieldName) -> Option<FieldError> {
        self.entries.get(&field).copied()
    }

    /// Message for a field, or an empty string when it has no error.
    #[must_use]
    pub fn message(&self, field: FieldName) -> String {
        self.get(field).map(|e| e.to_string()).unwrap_or_default()
    }

    /// Sets or clears the error for a field.
    pub fn set(&mut self, field: FieldName, error: Option<FieldError>) {
        match error {
            Some(error) => {
                self.entries.insert(field, error);
            }
            None => {
                self.entries.remove(&field);
            }
        }
    }

    /// Returns true if the field has an error.
    #[must_use]
    pub fn contains(&self, field: FieldName) -> bool {
        self.entries.contains_key(&field)
    }

    /// Returns true if any field has an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of fields with an error
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no field has an error
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates errors in field display order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, FieldError)> + '_ {
        self.entries.iter().map(|(field, error)| (*field, *error))
    }

    /// Removes all errors.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, error) in &self.entries {
            map.serialize_entry(field.as_str(), &error.to_string())?;
        }
        map.end()
    }
}
