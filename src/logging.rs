//! Tracing subscriber setup.
//!
//! Headless commands log to stderr. The TUI owns the terminal, so it logs
//! to `tokengen.log` in the config directory instead.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, LoggingConfig};

/// Log file name inside the config directory
pub const LOG_FILE_NAME: &str = "tokengen.log";

/// Builds the filter: `RUST_LOG` wins, then `--verbose`, then the configured level.
fn build_filter(logging: &LoggingConfig, verbose: bool) -> EnvFilter {
    let default_level = if verbose {
        "debug".to_string()
    } else {
        logging.level.to_lowercase()
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into())
}

/// Sets `subscriber` as the global default.
///
/// Returns false when a subscriber was already installed; that one stays.
fn install(subscriber: impl SubscriberInitExt) -> bool {
    match subscriber.try_init() {
        Ok(()) => true,
        Err(e) => {
            debug!("keeping existing tracing subscriber: {e}");
            false
        }
    }
}

/// Initializes logging to stderr.
///
/// Returns false if logging was already initialized, in which case the
/// existing subscriber keeps running.
pub fn init_stderr(logging: &LoggingConfig, verbose: bool) -> bool {
    install(
        tracing_subscriber::registry()
            .with(build_filter(logging, verbose))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            ),
    )
}

/// Initializes logging to the log file in the config directory.
///
/// Returns the path of the log file.
pub fn init_file(logging: &LoggingConfig, verbose: bool) -> Result<PathBuf> {
    let dir = Config::config_dir()?;
    fs::create_dir_all(&dir)
        .context(format!("Failed to create config directory: {}", dir.display()))?;

    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .context(format!("Failed to open log file: {}", path.display()))?;

    install(
        tracing_subscriber::registry()
            .with(build_filter(logging, verbose))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false),
            ),
    );

    Ok(path)
}
