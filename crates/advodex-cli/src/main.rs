//! CLI entry point - the composition root.
//!
//! Parses the command line, initializes tracing, and dispatches to the
//! handlers. All infrastructure wiring happens inside the handlers via
//! advodex-db; nothing here touches a pool directly.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use advodex_cli::{Cli, Commands, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before resolving any paths so ADVODEX_* overrides apply
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            static_dir,
            api_only,
            db,
        } => handlers::handle_serve(port, static_dir, api_only, db).await,
        Commands::Seed { force, db } => handlers::handle_seed(force, db).await,
        Commands::Search {
            term,
            page,
            page_size,
            db,
        } => handlers::handle_search(term, page, page_size, db).await,
        Commands::Paths => handlers::handle_paths(),
    }
}
