//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `diagnose` - Print the store diagnostics report

pub mod args;

pub use args::{Cli, Commands};
