//! Token Generator Library
//!
//! This library provides the form state manager that validates counts,
//! prefixes and row widths for two sets of labeled tokens and generates
//! the numbered labels, plus the terminal UI and headless CLI built on it.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod form;
pub mod logging;
pub mod models;
pub mod shortcuts;
pub mod tui;
