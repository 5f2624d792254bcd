//! Shared CLI plumbing: error type, exit codes, field flags and context.

use clap::Args;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{Config, LoggingConfig};
use crate::form::{FieldErrors, FormState};
use crate::models::FieldName;

/// Process exit codes used by headless commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success,
    /// Form inputs or arguments failed validation
    ValidationFailed,
    /// Config or other I/O failure
    IoError,
}

impl ExitCode {
    /// Numeric process exit code
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Success => 0,
            Self::ValidationFailed => 1,
            Self::IoError => 2,
        }
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Validation failure (exit code 1)
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationFailed,
            message: message.into(),
        }
    }

    /// I/O or configuration failure (exit code 2)
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// Resolved global options shared by all commands.
#[derive(Debug, Clone)]
pub struct CliContext {
    config_path: PathBuf,
}

impl CliContext {
    /// Uses `config_path` if given, otherwise the platform config file.
    pub fn new(config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => Config::config_file_path()?,
        };
        Ok(Self { config_path })
    }

    /// Path of the config file in use
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the config file, reporting failures as I/O errors.
    pub fn load_config(&self) -> CliResult<Config> {
        Config::load_from(&self.config_path).map_err(|e| {
            CliError::io(format!("Failed to load configuration: {e:#}"))
        })
    }

    /// Logging settings, falling back to defaults when the config is unreadable.
    #[must_use]
    pub fn logging_config(&self) -> LoggingConfig {
        Config::load_from(&self.config_path)
            .map(|config| config.logging)
            .unwrap_or_default()
    }
}

/// Form field flags shared by `generate` and `validate`.
#[derive(Debug, Clone, Default, Args)]
pub struct FieldArgs {
    /// Number of blue tokens
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub blue_count: Option<String>,

    /// Prefix for blue token labels
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub blue_prefix: Option<String>,

    /// Blue tokens per row
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub blue_per_row: Option<String>,

    /// Number of red tokens
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub red_count: Option<String>,

    /// Prefix for red token labels
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub red_prefix: Option<String>,

    /// Red tokens per row
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub red_per_row: Option<String>,
}

impl FieldArgs {
    /// Flag values paired with their form field, in display order.
    #[must_use]
    pub fn values(&self) -> [(FieldName, Option<&str>); 6] {
        [
            (FieldName::NumberOfBlue, self.blue_count.as_deref()),
            (FieldName::BluePrefix, self.blue_prefix.as_deref()),
            (FieldName::BluePerRow, self.blue_per_row.as_deref()),
            (FieldName::NumberOfRed, self.red_count.as_deref()),
            (FieldName::RedPrefix, self.red_prefix.as_deref()),
            (FieldName::RedPerRow, self.red_per_row.as_deref()),
        ]
    }

    /// Feeds every provided flag into the form as a field edit.
    pub fn apply(&self, form: &mut FormState) {
        for (field, value) in self.values() {
            if let Some(value) = value {
                form.update_field(field, value);
            }
        }
    }
}

/// Formats field errors as indented `field: message` lines.
#[must_use]
pub fn format_field_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, error)| format!("  {}: {error}", field.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldError;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("x").exit_code.code(), 1);
        assert_eq!(CliError::io("x").exit_code.code(), 2);
    }

    #[test]
    fn test_field_args_apply_only_given_flags() {
        let args = FieldArgs {
            blue_count: Some("0".to_string()),
            red_prefix: Some("R".to_string()),
            ..FieldArgs::default()
        };
        let mut form = FormState::new();
        args.apply(&mut form);

        assert_eq!(form.inputs().get(FieldName::NumberOfBlue), "0");
        assert_eq!(form.inputs().get(FieldName::RedPrefix), "R");
        assert_eq!(form.inputs().get(FieldName::BluePrefix), "");
        assert_eq!(form.errors().get(FieldName::NumberOfBlue), Some(FieldError::NotPositive));
        assert_eq!(form.errors().len(), 1);
    }

    #[test]
    fn test_format_field_errors() {
        let mut errors = FieldErrors::new();
        errors.set(FieldName::RedPerRow, Some(FieldError::PerRowTooSmall));
        assert_eq!(
            format_field_errors(&errors),
            "  redPerRow: Must be a number greater than 0"
        );
    }
}
