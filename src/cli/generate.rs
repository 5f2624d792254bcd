//! Generate command: fill the form from flags and print the tokens.

use crate::cli::common::{format_field_errors, CliContext, CliError, CliResult, FieldArgs};
use crate::form::FormState;
use crate::models::{TokenColor, TokenSet};
use clap::Args;
use serde::Serialize;
use serde_json::json;

/// Generate blue and red token labels
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON shape of a successful generation
#[derive(Debug, Serialize)]
struct GenerateOutput<'a> {
    blue: &'a TokenSet,
    red: &'a TokenSet,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self, context: &CliContext) -> CliResult<()> {
        let config = context.load_config()?;
        let mut form = FormState::with_max_tokens(config.limits.max_tokens);
        self.fields.apply(&mut form);

        if !form.generate().is_generated() {
            if self.json {
                let body = json!({ "errors": form.errors() });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&body)
                        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
                );
            }
            return Err(CliError::validation(format!(
                "Validation failed:\n{}",
                format_field_errors(form.errors())
            )));
        }

        if self.json {
            let output = GenerateOutput {
                blue: form.blue(),
                red: form.red(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            for (i, color) in TokenColor::ALL.into_iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_token_set(color, form.tokens(color));
            }
        }

        Ok(())
    }
}

/// Prints one token set as wrapped rows under a heading.
fn print_token_set(color: TokenColor, set: &TokenSet) {
    println!(
        "{} ({} total, {} per row)",
        color.title(),
        set.len(),
        set.per_row
    );
    for row in set.rows() {
        println!("  {}", row.join(" "));
    }
}
