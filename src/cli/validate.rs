//! Validation command for form inputs.

use crate::cli::common::{format_field_errors, CliContext, CliError, CliResult, FieldArgs};
use crate::form::{FieldErrors, FormInputs, FormState};
use clap::Args;
use serde::Serialize;

/// Validate form inputs without generating tokens
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Also report empty fields as required (as generate would)
    #[arg(long)]
    pub require_all: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON validation report
#[derive(Debug, Serialize)]
struct ValidationResponse<'a> {
    valid: bool,
    inputs: &'a FormInputs,
    errors: &'a FieldErrors,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, context: &CliContext) -> CliResult<()> {
        let config = context.load_config()?;
        let mut form = FormState::with_max_tokens(config.limits.max_tokens);
        self.fields.apply(&mut form);

        let errors = if self.require_all {
            form.validate_all()
        } else {
            form.errors().clone()
        };

        if self.json {
            let response = ValidationResponse {
                valid: errors.is_empty(),
                inputs: form.inputs(),
                errors: &errors,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if errors.is_empty() {
            println!("✓ All inputs are valid");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CliError::validation(format!(
                "Validation failed:\n{}",
                format_field_errors(&errors)
            )))
        }
    }
}
