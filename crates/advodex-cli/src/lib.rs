//! CLI library for advodex.
//!
//! Defines the command tree and handlers; `main.rs` parses and
//! dispatches.

pub mod commands;
pub mod handlers;

use clap::Parser;

pub use commands::Commands;

/// Advocate directory server and tools.
#[derive(Parser)]
#[command(name = "advodex", version, about = "Advocate directory server and tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }
}
