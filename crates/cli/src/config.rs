//! CLI configuration and top-level dispatch.

use crate::commands::{Command, CommandResult};
use clap::Parser;

/// Command-line interface for driving a circular ring from the console.
#[derive(Debug, Parser)]
#[command(name = "ring-cli", version, about = "Cursor-based circular ring toolbox")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    pub fn run(self) -> CommandResult {
        self.command.execute()
    }
}
