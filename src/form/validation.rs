//! Field-level validation rules.
//!
//! Each rule takes the raw text of a field and returns the error it
//! produces, if any. Empty count and per-row values are not errors here;
//! emptiness is only reported by the required check at generation time.

use crate::models::{FieldKind, FieldName};

use super::errors::FieldError;
use super::inputs::FormInputs;

/// Parses a numeric field value.
///
/// Surrounding whitespace is ignored. Decimal and exponent notation are
/// accepted; NaN and infinities are not numbers.
#[must_use]
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Converts an already validated numeric value into a whole count.
///
/// Fractional values are truncated toward zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn parse_whole(value: &str) -> Option<usize> {
    parse_number(value)
        .filter(|n| *n >= 0.0)
        .map(|n| n.trunc() as usize)
}

/// Rule for `numberOfBlue` / `numberOfRed`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn validate_count(value: &str, max_tokens: usize) -> Option<FieldError> {
    if value.is_empty() {
        return None;
    }
    match parse_number(value) {
        Some(n) if n > 0.0 => (n > max_tokens as f64).then_some(FieldError::TooMany { max: max_tokens }),
        _ => Some(FieldError::NotPositive),
    }
}

/// Rule for `bluePerRow` / `redPerRow`.
#[must_use]
pub fn validate_per_row(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return None;
    }
    match parse_number(value) {
        Some(n) if n >= 1.0 => None,
        _ => Some(FieldError::PerRowTooSmall),
    }
}

/// Rule for `bluePrefix` / `redPrefix`.
#[must_use]
pub fn validate_prefix(value: &str) -> Option<FieldError> {
    value.trim().is_empty().then_some(FieldError::EmptyPrefix)
}

/// Cross-field rule: a row cannot be wider than the whole set.
///
/// Only applies when both values are numbers.
#[must_use]
pub fn check_per_row_against_count(count: &str, per_row: &str) -> Option<FieldError> {
    let count = parse_number(count)?;
    let per_row = parse_number(per_row)?;
    (count < per_row).then_some(FieldError::PerRowExceedsTotal)
}

/// Runs the single-field rule for `field` against its current value.
#[must_use]
pub fn validate_field(field: FieldName, value: &str, max_tokens: usize) -> Option<FieldError> {
    match field.kind() {
        FieldKind::Count => validate_count(value, max_tokens),
        FieldKind::Prefix => validate_prefix(value),
        FieldKind::PerRow => validate_per_row(value),
    }
}

/// Required check used at generation time.
#[must_use]
pub fn check_required(inputs: &FormInputs, field: FieldName) -> Option<FieldError> {
    inputs
        .get(field)
        .trim()
        .is_empty()
        .then_some(FieldError::Required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_accepts_whitespace_and_decimals() {
        assert_eq!(parse_number(" 3 "), Some(3.0));
        assert_eq!(parse_number("2.5"), Some(2.5));
        assert_eq!(parse_number("1e2"), Some(100.0));
    }

    #[test]
    fn test_parse_number_rejects_non_numbers() {
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_parse_whole_truncates() {
        assert_eq!(parse_whole("3.9"), Some(3));
        assert_eq!(parse_whole("-1"), None);
    }

    #[test]
    fn test_count_rule() {
        assert_eq!(validate_count("", 100), None);
        assert_eq!(validate_count("5", 100), None);
        assert_eq!(validate_count("0", 100), Some(FieldError::NotPositive));
        assert_eq!(validate_count("-2", 100), Some(FieldError::NotPositive));
        assert_eq!(validate_count("x", 100), Some(FieldError::NotPositive));
        assert_eq!(validate_count("   ", 100), Some(FieldError::NotPositive));
        assert_eq!(validate_count("101", 100), Some(FieldError::TooMany { max: 100 }));
    }

    #[test]
    fn test_per_row_rule() {
        assert_eq!(validate_per_row(""), None);
        assert_eq!(validate_per_row("1"), None);
        assert_eq!(validate_per_row("0"), Some(FieldError::PerRowTooSmall));
        assert_eq!(validate_per_row("0.5"), Some(FieldError::PerRowTooSmall));
        assert_eq!(validate_per_row("wide"), Some(FieldError::PerRowTooSmall));
    }

    #[test]
    fn test_prefix_rule() {
        assert_eq!(validate_prefix("B"), None);
        assert_eq!(validate_prefix(""), Some(FieldError::EmptyPrefix));
        assert_eq!(validate_prefix("  "), Some(FieldError::EmptyPrefix));
    }

    #[test]
    fn test_cross_field_rule() {
        assert_eq!(check_per_row_against_count("3", "4"), Some(FieldError::PerRowExceedsTotal));
        assert_eq!(check_per_row_against_count("3", "3"), None);
        assert_eq!(check_per_row_against_count("", "3"), None);
        assert_eq!(check_per_row_against_count("3", ""), None);
    }

    #[test]
    fn test_required_check() {
        let mut inputs = FormInputs::new();
        assert_eq!(check_required(&inputs, FieldName::RedPrefix), Some(FieldError::Required));
        inputs.set(FieldName::RedPrefix, " \t");
        assert_eq!(check_required(&inputs, FieldName::RedPrefix), Some(FieldError::Required));
        inputs.set(FieldName::RedPrefix, "R");
        assert_eq!(check_required(&inputs, FieldName::RedPrefix), None);
    }
}
