//! Configuration management CLI commands.

use crate::cli::common::{CliContext, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigSetArgs {
    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Ask before clearing generated tokens
    #[arg(long, value_name = "BOOL")]
    confirm_clear: Option<bool>,

    /// Success banner duration in milliseconds
    #[arg(long, value_name = "MS")]
    success_ms: Option<u64>,

    /// Token chip width in columns
    #[arg(long, value_name = "COLS")]
    cell_width: Option<u16>,

    /// Largest accepted token count per color
    #[arg(long, value_name = "N")]
    max_tokens: Option<usize>,

    /// Default log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, context: &CliContext) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(context),
            ConfigCommand::Set(args) => args.execute(context),
            ConfigCommand::Path => {
                println!("{}", context.config_path().display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, context: &CliContext) -> CliResult<()> {
        let config = context.load_config()?;

        if self.json {
            let json = serde_json::to_string_pretty(&config).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.theme.is_none()
            && self.confirm_clear.is_none()
            && self.success_ms.is_none()
            && self.cell_width.is_none()
            && self.max_tokens.is_none()
            && self.log_level.is_none()
    }

    /// Applies the given options to `config`.
    fn apply(&self, config: &mut Config) -> CliResult<()> {
        if let Some(theme) = &self.theme {
            config.ui.theme_mode = ThemeMode::parse(theme).ok_or_else(|| {
                CliError::validation("Invalid theme mode. Must be 'auto', 'light', or 'dark'")
            })?;
        }
        if let Some(confirm) = self.confirm_clear {
            config.ui.confirm_clear = confirm;
        }
        if let Some(ms) = self.success_ms {
            config.ui.success_banner_ms = ms;
        }
        if let Some(width) = self.cell_width {
            config.ui.token_cell_width = width;
        }
        if let Some(max) = self.max_tokens {
            config.limits.max_tokens = max;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.to_lowercase();
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))
    }

    /// Execute set command
    pub fn execute(&self, context: &CliContext) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --theme, --confirm-clear, \
                 --success-ms, --cell-width, --max-tokens, or --log-level",
            ));
        }

        let mut config = context.load_config()?;
        self.apply(&mut config)?;

        config
            .save_to(context.config_path())
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Token Generator Configuration");
    println!("=============================");
    println!();

    println!("UI:");
    println!(
        "  Theme Mode: {}",
        format!("{:?}", config.ui.theme_mode).to_lowercase()
    );
    println!("  Confirm Clear: {}", config.ui.confirm_clear);
    println!("  Success Banner: {} ms", config.ui.success_banner_ms);
    println!("  Token Cell Width: {}", config.ui.token_cell_width);
    println!();

    println!("Limits:");
    println!("  Max Tokens: {}", config.limits.max_tokens);
    println!();

    println!("Logging:");
    println!("  Level: {}", config.logging.level);
    println!();
}
