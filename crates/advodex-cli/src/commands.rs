//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands for the advocate directory tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (API plus browser UI)
    Serve {
        /// Port for the HTTP server
        #[arg(short, long, default_value_t = 9887)]
        port: u16,
        /// Directory with the built browser UI assets
        #[arg(long, default_value = "ui")]
        static_dir: PathBuf,
        /// Serve only the API endpoints, no static assets
        #[arg(long)]
        api_only: bool,
        /// Override the SQLite database path
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Populate the database with the seed corpus
    Seed {
        /// Replace existing rows instead of skipping a non-empty table
        #[arg(long)]
        force: bool,
        /// Override the SQLite database path
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Search the directory from the command line
    Search {
        /// Search term (name, city, degree, specialty, or "<N> years")
        term: Option<String>,
        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Rows per page
        #[arg(long, default_value_t = 10)]
        page_size: u32,
        /// Override the SQLite database path
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Show resolved paths for advodex data
    Paths,
}
