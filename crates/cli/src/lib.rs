//! CLI tool for driving circular rings from the console.
//!
//! Provides commands for:
//! - Ingesting a line of space-separated tokens from stdin
//! - Rendering a ring loaded from command-line tokens

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::CliConfig;
