//! Token Generator - terminal token label generator
//!
//! Runs the interactive form when started without a subcommand, or one of
//! the headless `generate`, `validate` and `config` commands.

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use tokengen::cli::{CliContext, Command, ExitCode};
use tokengen::config::Config;
use tokengen::constants::{APP_BINARY_NAME, APP_NAME};
use tokengen::{logging, tui};

/// Token Generator - build numbered labels for blue and red tokens
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(command) => run_command(&command, cli.config, cli.verbose),
        None => run_interactive(cli.config.as_deref(), cli.verbose),
    }
}

/// Runs a headless subcommand and exits with its exit code on failure.
fn run_command(command: &Command, config_path: Option<PathBuf>, verbose: bool) -> Result<()> {
    let context = match CliContext::new(config_path) {
        Ok(context) => context,
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(ExitCode::IoError.code());
        }
    };

    logging::init_stderr(&context.logging_config(), verbose);

    if let Err(err) = command.execute(&context) {
        eprintln!("Error: {}", err.message);
        std::process::exit(err.exit_code.code());
    }

    Ok(())
}

/// Starts the terminal UI.
fn run_interactive(config_path: Option<&Path>, verbose: bool) -> Result<()> {
    let loaded = match config_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let (config, config_warning) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(format!("{e:#}"))),
    };

    match logging::init_file(&config.logging, verbose) {
        Ok(path) => info!(
            "{APP_NAME} v{} logging to {}",
            env!("CARGO_PKG_VERSION"),
            path.display()
        ),
        Err(e) => eprintln!("Warning: file logging disabled: {e:#}"),
    }

    let mut app_state = tui::AppState::new(config);
    if let Some(message) = config_warning {
        warn!("using default configuration: {message}");
        app_state.set_warning(format!("Config not loaded, using defaults: {message}"));
    }

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    result
}
