//! Generated token sets.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::field::FieldName;

/// The two independent token groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenColor {
    /// Blue token group
    Blue,
    /// Red token group
    Red,
}

impl TokenColor {
    /// Both colors, blue first.
    pub const ALL: [Self; 2] = [Self::Blue, Self::Red];

    /// Count field for this color
    #[must_use]
    pub const fn count_field(&self) -> FieldName {
        match self {
            Self::Blue => FieldName::NumberOfBlue,
            Self::Red => FieldName::NumberOfRed,
        }
    }

    /// Prefix field for this color
    #[must_use]
    pub const fn prefix_field(&self) -> FieldName {
        match self {
            Self::Blue => FieldName::BluePrefix,
            Self::Red => FieldName::RedPrefix,
        }
    }

    /// Per-row field for this color
    #[must_use]
    pub const fn per_row_field(&self) -> FieldName {
        match self {
            Self::Blue => FieldName::BluePerRow,
            Self::Red => FieldName::RedPerRow,
        }
    }

    /// Panel title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Blue => "Blue Tokens",
            Self::Red => "Red Tokens",
        }
    }
}

impl fmt::Display for TokenColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blue => f.write_str("blue"),
            Self::Red => f.write_str("red"),
        }
    }
}

/// A generated sequence of labels together with its row-wrap width.
///
/// `per_row` is always at least 1; an empty set keeps the default width of 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSet {
    /// Labels in generation order (`prefix1`, `prefix2`, ...)
    pub tokens: Vec<String>,
    /// Number of tokens per display row
    pub per_row: usize,
}

impl TokenSet {
    /// Creates an empty set with the default width.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            tokens: Vec::new(),
            per_row: 1,
        }
    }

    /// Generates `count` labels `prefix1..=prefix{count}`.
    ///
    /// A `per_row` of zero is clamped to 1.
    #[must_use]
    pub fn generate(prefix: &str, count: usize, per_row: usize) -> Self {
        let tokens = (1..=count).map(|i| format!("{prefix}{i}")).collect();
        Self {
            tokens,
            per_row: per_row.max(1),
        }
    }

    /// Returns true if no tokens have been generated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of generated tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Splits the tokens into display rows. The last row may be shorter.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.tokens.chunks(self.per_row.max(1))
    }

    /// Number of display rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.tokens.len().div_ceil(self.per_row.max(1))
    }

    /// Renders the set as plain text, one row per line, tokens separated by spaces.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.rows()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::empty()
    }
}
