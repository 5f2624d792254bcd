//! Raw form input values.

use serde::{Deserialize, Serialize};

use crate::models::FieldName;

/// The six raw text inputs of the form.
///
/// Values are kept as text because a field may be empty or hold a
/// half-typed number while the user is editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInputs {
    /// Raw blue count
    pub number_of_blue: String,
    /// Blue label prefix
    pub blue_prefix: String,
    /// Raw blue per-row width
    pub blue_per_row: String,
    /// Raw red count
    pub number_of_red: String,
    /// Red label prefix
    pub red_prefix: String,
    /// Raw red per-row width
    pub red_per_row: String,
}

impl FormInputs {
    /// Creates inputs with every field empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value of a field.
    #[must_use]
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::NumberOfBlue => &self.number_of_blue,
            FieldName::BluePrefix => &self.blue_prefix,
            FieldName::BluePerRow => &self.blue_per_row,
            FieldName::NumberOfRed => &self.number_of_red,
            FieldName::RedPrefix => &self.red_prefix,
            FieldName::RedPerRow => &self.red_per_row,
        }
    }

    /// Returns a mutable handle to the raw value of a field.
    pub fn get_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::NumberOfBlue => &mut self.number_of_blue,
            FieldName::BluePrefix => &mut self.blue_prefix,
            FieldName::BluePerRow => &mut self.blue_per_row,
            FieldName::NumberOfRed => &mut self.number_of_red,
            FieldName::RedPrefix => &mut self.red_prefix,
            FieldName::RedPerRow => &mut self.red_per_row,
        }
    }

    /// Replaces the raw value of a field.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Iterates `(field, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        FieldName::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Returns true if every field is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.iter().all(|(_, value)| value.is_empty())
    }
}
