//! Form state manager.
//!
//! `FormState` owns the six raw inputs, their validation errors and the two
//! generated token sets. Presentation layers hold a `FormState` and call
//! [`FormState::update_field`], [`FormState::generate`] and
//! [`FormState::clear`]; nothing else mutates it.

pub mod errors;
pub mod inputs;
pub mod validation;

use tracing::{debug, info};

use crate::models::{FieldKind, FieldName, TokenColor, TokenSet};

pub use errors::{FieldError, FieldErrors};
pub use inputs::FormInputs;

/// Default upper bound on tokens per color.
pub const DEFAULT_MAX_TOKENS: usize = 10_000;

/// Largest token limit a configuration may set. Generation allocates every
/// label up front, so the limit itself must stay bounded.
pub const MAX_TOKENS_CEILING: usize = 1_000_000;

/// Logical state of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// No tokens generated yet (or cleared)
    Editing,
    /// Tokens from the last successful generation are available
    Generated,
}

/// Result of a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Both token sets were replaced
    Generated,
    /// Validation failed; token sets are unchanged and errors are populated
    Rejected,
}

impl GenerateOutcome {
    /// Returns true if tokens were generated
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        matches!(self, Self::Generated)
    }
}

/// Form state: inputs, errors and generated tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    inputs: FormInputs,
    errors: FieldErrors,
    blue: TokenSet,
    red: TokenSet,
    max_tokens: usize,
}

impl FormState {
    /// Creates an empty form with the default token limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_tokens(DEFAULT_MAX_TOKENS)
    }

    /// Creates an empty form that rejects counts above `max_tokens`.
    ///
    /// The limit is clamped to `1..=MAX_TOKENS_CEILING`.
    #[must_use]
    pub fn with_max_tokens(max_tokens: usize) -> Self {
        Self {
            inputs: FormInputs::new(),
            errors: FieldErrors::new(),
            blue: TokenSet::empty(),
            red: TokenSet::empty(),
            max_tokens: max_tokens.clamp(1, MAX_TOKENS_CEILING),
        }
    }

    /// Raw input values
    #[must_use]
    pub const fn inputs(&self) -> &FormInputs {
        &self.inputs
    }

    /// Current field errors
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Generated blue tokens and their row width
    #[must_use]
    pub const fn blue(&self) -> &TokenSet {
        &self.blue
    }

    /// Generated red tokens and their row width
    #[must_use]
    pub const fn red(&self) -> &TokenSet {
        &self.red
    }

    /// Token set for a color
    #[must_use]
    pub const fn tokens(&self, color: TokenColor) -> &TokenSet {
        match color {
            TokenColor::Blue => &self.blue,
            TokenColor::Red => &self.red,
        }
    }

    /// Current logical state
    #[must_use]
    pub fn phase(&self) -> FormPhase {
        if self.blue.is_empty() && self.red.is_empty() {
            FormPhase::Editing
        } else {
            FormPhase::Generated
        }
    }

    /// Sets a field and re-validates it.
    ///
    /// Changing a count also re-checks its per-row field (when that field has
    /// a value), since the per-row width may now exceed the total.
    pub fn update_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.inputs.set(field, value);
        let value = self.inputs.get(field);
        debug!(field = %field, value, "field updated");

        match field.kind() {
            FieldKind::Count => {
                let error = validation::validate_count(value, self.max_tokens);
                self.errors.set(field, error);
                let per_row_field = field.color().per_row_field();
                if error.is_none() && !self.inputs.get(per_row_field).is_empty() {
                    self.revalidate_per_row(field.color());
                }
            }
            FieldKind::PerRow => self.revalidate_per_row(field.color()),
            FieldKind::Prefix => {
                let error = validation::validate_prefix(value);
                self.errors.set(field, error);
            }
        }
    }

    /// Per-row format rule, then the cross-field rule when the count is clean.
    fn revalidate_per_row(&mut self, color: TokenColor) {
        let error = self.per_row_error(color, &self.errors);
        self.errors.set(color.per_row_field(), error);
    }

    fn per_row_error(&self, color: TokenColor, errors: &FieldErrors) -> Option<FieldError> {
        let count_field = color.count_field();
        let per_row = self.inputs.get(color.per_row_field());
        validation::validate_per_row(per_row).or_else(|| {
            if errors.contains(count_field) {
                None
            } else {
                validation::check_per_row_against_count(self.inputs.get(count_field), per_row)
            }
        })
    }

    /// Full validation of the current inputs, without touching state.
    ///
    /// Empty fields get the required error; every other field is checked
    /// with its single-field rule and, for per-row fields, the cross-field rule.
    #[must_use]
    pub fn validate_all(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in FieldName::ALL {
            errors.set(field, validation::check_required(&self.inputs, field));
        }
        // Counts precede their per-row fields in ALL, so the cross-field
        // check sees the count's final error state.
        for field in FieldName::ALL {
            if errors.contains(field) {
                continue;
            }
            let error = match field.kind() {
                FieldKind::PerRow => self.per_row_error(field.color(), &errors),
                _ => validation::validate_field(field, self.inputs.get(field), self.max_tokens),
            };
            errors.set(field, error);
        }
        errors
    }

    /// Validates every field and, if all pass, regenerates both token sets.
    ///
    /// The result of [`FormState::validate_all`] replaces the error map.
    /// Generation is rejected if that map has any error or if any error was
    /// showing before the call. On rejection the token sets are left untouched.
    pub fn generate(&mut self) -> GenerateOutcome {
        let previous = self.errors.clone();
        let next = self.validate_all();

        let rejected = next.has_errors() || previous.has_errors();
        self.errors = next;
        if rejected {
            debug!(
                errors = self.errors.len(),
                stale = previous.len(),
                "generation rejected"
            );
            return GenerateOutcome::Rejected;
        }

        let (Some(blue), Some(red)) = (
            self.build_set(TokenColor::Blue),
            self.build_set(TokenColor::Red),
        ) else {
            return GenerateOutcome::Rejected;
        };

        info!(
            blue = blue.len(),
            blue_per_row = blue.per_row,
            red = red.len(),
            red_per_row = red.per_row,
            "tokens generated"
        );
        self.blue = blue;
        self.red = red;
        GenerateOutcome::Generated
    }

    fn build_set(&self, color: TokenColor) -> Option<TokenSet> {
        let count = validation::parse_whole(self.inputs.get(color.count_field()))?;
        let per_row = validation::parse_whole(self.inputs.get(color.per_row_field()))?;
        let prefix = self.inputs.get(color.prefix_field());
        Some(TokenSet::generate(prefix, count, per_row))
    }

    /// Resets inputs, errors and both token sets to their initial values.
    pub fn clear(&mut self) {
        self.inputs = FormInputs::new();
        self.errors.clear();
        self.blue = TokenSet::empty();
        self.red = TokenSet::empty();
        info!("form cleared");
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(values: [&str; 6]) -> FormState {
        let mut form = FormState::new();
        for (field, value) in FieldName::ALL.into_iter().zip(values) {
            form.update_field(field, value);
        }
        form
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = FormState::new();
        assert!(form.inputs().is_blank());
        assert!(form.errors().is_empty());
        assert!(form.blue().is_empty());
        assert_eq!(form.red().per_row, 1);
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_generate_scenario() {
        let mut form = filled(["3", "B", "2", "2", "R", "1"]);
        assert!(form.errors().is_empty());

        assert_eq!(form.generate(), GenerateOutcome::Generated);
        assert_eq!(form.blue().tokens, vec!["B1", "B2", "B3"]);
        assert_eq!(form.red().tokens, vec!["R1", "R2"]);
        assert_eq!(form.blue().per_row, 2);
        assert_eq!(form.red().per_row, 1);
        assert_eq!(form.phase(), FormPhase::Generated);
    }

    #[test]
    fn test_zero_count_rejected() {
        let mut form = filled(["0", "B", "1", "2", "R", "1"]);
        assert_eq!(
            form.errors().get(FieldName::NumberOfBlue),
            Some(FieldError::NotPositive)
        );

        assert_eq!(form.generate(), GenerateOutcome::Rejected);
        assert!(form.blue().is_empty());
        assert!(form.red().is_empty());
        assert_eq!(
            form.errors().message(FieldName::NumberOfBlue),
            "Must be a positive number"
        );
    }

    #[test]
    fn test_required_fields_reported_on_generate() {
        let mut form = FormState::new();
        assert_eq!(form.generate(), GenerateOutcome::Rejected);
        for field in FieldName::ALL {
            assert_eq!(form.errors().get(field), Some(FieldError::Required));
        }
    }

    #[test]
    fn test_emptying_field_keeps_previous_tokens() {
        let mut form = filled(["3", "B", "2", "2", "R", "1"]);
        form.generate();
        let before = form.clone();

        form.update_field(FieldName::RedPrefix, "");
        assert_eq!(form.generate(), GenerateOutcome::Rejected);
        assert_eq!(form.errors().get(FieldName::RedPrefix), Some(FieldError::Required));
        assert_eq!(form.blue(), before.blue());
        assert_eq!(form.red(), before.red());
    }

    #[test]
    fn test_per_row_exceeding_count_blocks_then_clears() {
        let mut form = filled(["3", "B", "1", "2", "R", "1"]);
        form.update_field(FieldName::BluePerRow, "4");
        assert_eq!(
            form.errors().get(FieldName::BluePerRow),
            Some(FieldError::PerRowExceedsTotal)
        );
        assert_eq!(form.generate(), GenerateOutcome::Rejected);
        assert!(form.blue().is_empty());

        form.update_field(FieldName::BluePerRow, "3");
        assert_eq!(form.errors().get(FieldName::BluePerRow), None);
        assert_eq!(form.generate(), GenerateOutcome::Generated);
    }

    #[test]
    fn test_lowering_count_flags_per_row() {
        let mut form = filled(["5", "B", "4", "2", "R", "1"]);
        assert!(form.errors().is_empty());

        form.update_field(FieldName::NumberOfBlue, "3");
        assert_eq!(
            form.errors().get(FieldName::BluePerRow),
            Some(FieldError::PerRowExceedsTotal)
        );

        form.update_field(FieldName::NumberOfBlue, "4");
        assert_eq!(form.errors().get(FieldName::BluePerRow), None);
    }

    #[test]
    fn test_invalid_count_leaves_per_row_error_alone() {
        let mut form = filled(["2", "B", "3", "2", "R", "1"]);
        assert!(form.errors().contains(FieldName::BluePerRow));

        form.update_field(FieldName::NumberOfBlue, "abc");
        assert_eq!(
            form.errors().get(FieldName::NumberOfBlue),
            Some(FieldError::NotPositive)
        );
        assert_eq!(
            form.errors().get(FieldName::BluePerRow),
            Some(FieldError::PerRowExceedsTotal)
        );
    }

    #[test]
    fn test_count_change_keeps_required_error_on_empty_per_row() {
        let mut form = FormState::new();
        form.generate();
        form.update_field(FieldName::NumberOfRed, "4");
        assert_eq!(form.errors().get(FieldName::NumberOfRed), None);
        assert_eq!(form.errors().get(FieldName::RedPerRow), Some(FieldError::Required));
    }

    #[test]
    fn test_prefix_rule_on_change() {
        let mut form = FormState::new();
        form.update_field(FieldName::BluePrefix, "   ");
        assert_eq!(form.errors().get(FieldName::BluePrefix), Some(FieldError::EmptyPrefix));
        form.update_field(FieldName::BluePrefix, "Blue-");
        assert_eq!(form.errors().get(FieldName::BluePrefix), None);
    }

    #[test]
    fn test_colors_are_independent() {
        let mut form = filled(["2", "B", "3", "4", "R", "2"]);
        assert!(form.errors().contains(FieldName::BluePerRow));
        assert!(!form.errors().contains(FieldName::RedPerRow));
        assert_eq!(form.generate(), GenerateOutcome::Rejected);
    }

    #[test]
    fn test_count_above_limit_rejected() {
        let mut form = FormState::with_max_tokens(10);
        form.update_field(FieldName::NumberOfBlue, "11");
        assert_eq!(
            form.errors().get(FieldName::NumberOfBlue),
            Some(FieldError::TooMany { max: 10 })
        );
    }

    #[test]
    fn test_limit_is_clamped_to_ceiling() {
        let mut form = FormState::with_max_tokens(usize::MAX);
        form.update_field(FieldName::NumberOfBlue, "1e17");
        assert_eq!(
            form.errors().get(FieldName::NumberOfBlue),
            Some(FieldError::TooMany {
                max: MAX_TOKENS_CEILING
            })
        );
        assert_eq!(form.generate(), GenerateOutcome::Rejected);
        assert!(form.blue().is_empty());
    }

    #[test]
    fn test_emptying_count_drops_cross_field_error() {
        let mut form = filled(["3", "B", "2", "2", "R", "1"]);
        form.update_field(FieldName::BluePerRow, "5");
        assert_eq!(
            form.errors().get(FieldName::BluePerRow),
            Some(FieldError::PerRowExceedsTotal)
        );

        // An empty count is not a number, so the row width has nothing to exceed
        form.update_field(FieldName::NumberOfBlue, "");
        assert_eq!(form.errors().get(FieldName::BluePerRow), None);
        assert_eq!(form.errors().get(FieldName::NumberOfBlue), None);

        // Generation still refuses through the required check
        assert_eq!(form.generate(), GenerateOutcome::Rejected);
        assert_eq!(
            form.errors().get(FieldName::NumberOfBlue),
            Some(FieldError::Required)
        );
    }

    #[test]
    fn test_fractional_values_truncate() {
        let mut form = filled(["3.7", "B", "1.5", "1", "R", "1"]);
        assert_eq!(form.generate(), GenerateOutcome::Generated);
        assert_eq!(form.blue().len(), 3);
        assert_eq!(form.blue().per_row, 1);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = filled(["3", "B", "2", "2", "R", "1"]);
        form.generate();
        form.update_field(FieldName::NumberOfRed, "0");

        form.clear();
        assert_eq!(form, FormState::new());
        assert_eq!(form.phase(), FormPhase::Editing);

        form.clear();
        assert_eq!(form, FormState::new());
    }

    #[test]
    fn test_validate_all_does_not_mutate() {
        let form = filled(["3", "", "2", "0", "R", "1"]);
        let before = form.clone();
        let errors = form.validate_all();
        assert_eq!(errors.get(FieldName::BluePrefix), Some(FieldError::Required));
        assert_eq!(errors.get(FieldName::NumberOfRed), Some(FieldError::NotPositive));
        assert_eq!(errors.get(FieldName::RedPerRow), None);
        assert_eq!(form, before);
    }

    #[test]
    fn test_generate_twice_replaces_tokens() {
        let mut form = filled(["3", "B", "2", "2", "R", "1"]);
        form.generate();
        form.update_field(FieldName::NumberOfBlue, "1");
        form.update_field(FieldName::BluePerRow, "1");
        form.update_field(FieldName::BluePrefix, "X");
        assert_eq!(form.generate(), GenerateOutcome::Generated);
        assert_eq!(form.blue().tokens, vec!["X1"]);
        assert_eq!(form.red().tokens, vec!["R1", "R2"]);
    }
}
