//! Form field identifiers.
//!
//! The form has exactly six inputs, three per token color. Field names are
//! fixed, so they are modelled as an enum rather than free-form strings.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::token::TokenColor;

/// One of the six recognized form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    /// Number of blue tokens to generate
    NumberOfBlue,
    /// Label prefix for blue tokens
    BluePrefix,
    /// Blue tokens displayed per row
    BluePerRow,
    /// Number of red tokens to generate
    NumberOfRed,
    /// Label prefix for red tokens
    RedPrefix,
    /// Red tokens displayed per row
    RedPerRow,
}

/// What kind of value a field holds, which decides its validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Total number of tokens for a color
    Count,
    /// Text prepended to each token index
    Prefix,
    /// Row-wrap width for a color
    PerRow,
}

impl FieldName {
    /// All fields in display order.
    pub const ALL: [Self; 6] = [
        Self::NumberOfBlue,
        Self::BluePrefix,
        Self::BluePerRow,
        Self::NumberOfRed,
        Self::RedPrefix,
        Self::RedPerRow,
    ];

    /// Wire name of the field (camelCase, as used in JSON output).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NumberOfBlue => "numberOfBlue",
            Self::BluePrefix => "bluePrefix",
            Self::BluePerRow => "bluePerRow",
            Self::NumberOfRed => "numberOfRed",
            Self::RedPrefix => "redPrefix",
            Self::RedPerRow => "redPerRow",
        }
    }

    /// Human-readable label shown next to the input.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NumberOfBlue => "Number of Blue Tokens",
            Self::BluePrefix => "Blue Prefix",
            Self::BluePerRow => "Blue Tokens per Row",
            Self::NumberOfRed => "Number of Red Tokens",
            Self::RedPrefix => "Red Prefix",
            Self::RedPerRow => "Red Tokens per Row",
        }
    }

    /// Token color this field belongs to.
    #[must_use]
    pub const fn color(&self) -> TokenColor {
        match self {
            Self::NumberOfBlue | Self::BluePrefix | Self::BluePerRow => TokenColor::Blue,
            Self::NumberOfRed | Self::RedPrefix | Self::RedPerRow => TokenColor::Red,
        }
    }

    /// Validation kind of this field.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::NumberOfBlue | Self::NumberOfRed => FieldKind::Count,
            Self::BluePrefix | Self::RedPrefix => FieldKind::Prefix,
            Self::BluePerRow | Self::RedPerRow => FieldKind::PerRow,
        }
    }

    /// Get next field (wraps around)
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::NumberOfBlue => Self::BluePrefix,
            Self::BluePrefix => Self::BluePerRow,
            Self::BluePerRow => Self::NumberOfRed,
            Self::NumberOfRed => Self::RedPrefix,
            Self::RedPrefix => Self::RedPerRow,
            Self::RedPerRow => Self::NumberOfBlue,
        }
    }

    /// Get previous field (wraps around)
    #[must_use]
    pub const fn previous(&self) -> Self {
        match self {
            Self::NumberOfBlue => Self::RedPerRow,
            Self::BluePrefix => Self::NumberOfBlue,
            Self::BluePerRow => Self::BluePrefix,
            Self::NumberOfRed => Self::BluePerRow,
            Self::RedPrefix => Self::NumberOfRed,
            Self::RedPerRow => Self::RedPrefix,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
