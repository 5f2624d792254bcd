//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the tokengen binary
pub fn tokengen_bin() -> String {
    std::env::var("CARGO_BIN_EXE_tokengen").unwrap_or_else(|_| "target/release/tokengen".to_string())
}

/// Creates a Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(tokengen_bin());
    cmd.env("TOKENGEN_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the binary with an isolated config directory and returns its output.
pub fn run(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Creates a temp directory to hold the config file.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Writes `content` as `config.toml` inside `dir` and returns the file path.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

/// The field flags of the canonical example (3 blue per 2, 1 red per 1).
pub fn example_field_args() -> Vec<&'static str> {
    vec![
        "--blue-count",
        "3",
        "--blue-prefix",
        "B",
        "--blue-per-row",
        "2",
        "--red-count",
        "1",
        "--red-prefix",
        "R",
        "--red-per-row",
        "1",
    ]
}

/// Stdout as a lossy string
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a lossy string
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
