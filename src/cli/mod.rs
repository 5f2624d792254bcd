//! CLI command handlers.
//!
//! This module provides headless, scriptable access to the form state
//! manager for automation and testing.

pub mod common;
pub mod config;
pub mod generate;
pub mod validate;

use clap::Subcommand;

// Re-export types used by main.rs and tests
pub use common::{CliContext, CliError, CliResult, ExitCode, FieldArgs};
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
pub use validate::ValidateArgs;

/// Headless subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate token labels from the given fields
    Generate(GenerateArgs),
    /// Validate fields without generating
    Validate(ValidateArgs),
    /// View or change configuration
    Config(ConfigArgs),
}

impl Command {
    /// Runs the selected subcommand
    pub fn execute(&self, context: &CliContext) -> CliResult<()> {
        match self {
            Self::Generate(args) => args.execute(context),
            Self::Validate(args) => args.execute(context),
            Self::Config(args) => args.execute(context),
        }
    }
}
