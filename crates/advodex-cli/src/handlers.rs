//! Command handlers.
//!
//! Each handler composes what it needs from advodex-db and delegates to
//! the core service. No handler touches a pool outside this file.

use std::path::PathBuf;

use anyhow::Result;

use advodex_axum::{ServerConfig, start_server};
use advodex_core::{DirectoryQuery, DirectoryService, data_root, database_path};
use advodex_db::{DbFactory, seed_advocates, setup_database};

/// Resolve the database path, honoring a CLI override.
fn resolve_db_path(db: Option<PathBuf>) -> Result<PathBuf> {
    match db {
        Some(path) => Ok(path),
        None => Ok(database_path()?),
    }
}

/// Start the web server.
pub async fn handle_serve(
    port: u16,
    static_dir: PathBuf,
    api_only: bool,
    db: Option<PathBuf>,
) -> Result<()> {
    let mut config = ServerConfig::with_defaults();
    config.port = port;
    config.db_path = db;
    if !api_only {
        config = config.with_static_dir(static_dir);
    }
    start_server(config).await
}

/// Seed the database with the standard corpus.
pub async fn handle_seed(force: bool, db: Option<PathBuf>) -> Result<()> {
    let db_path = resolve_db_path(db)?;
    let pool = setup_database(&db_path).await?;

    let inserted = seed_advocates(&pool, force).await?;
    if inserted == 0 {
        println!("Database already seeded ({}). Use --force to reseed.", db_path.display());
    } else {
        println!("Seeded {inserted} advocates into {}", db_path.display());
    }
    Ok(())
}

/// Search the directory and print a plain-text table.
pub async fn handle_search(
    term: Option<String>,
    page: u32,
    page_size: u32,
    db: Option<PathBuf>,
) -> Result<()> {
    let db_path = resolve_db_path(db)?;
    let pool = setup_database(&db_path).await?;
    let directory: DirectoryService = DbFactory::directory_service(pool);

    let result = directory
        .search(DirectoryQuery {
            term,
            page,
            page_size,
        })
        .await?;

    if result.advocates.is_empty() {
        println!("No advocates matched.");
        return Ok(());
    }

    println!(
        "{:<4} {:<22} {:<16} {:<7} {:>5}  {}",
        "ID", "Name", "City", "Degree", "Yrs", "Specialties"
    );
    for advocate in &result.advocates {
        println!(
            "{:<4} {:<22} {:<16} {:<7} {:>5}  {}",
            advocate.id,
            advocate.full_name(),
            advocate.city,
            advocate.degree,
            advocate.years_of_experience,
            advocate.specialties.join(", "),
        );
    }
    println!(
        "\nPage {} of {} ({} total)",
        result.page,
        result.total_pages(),
        result.total
    );
    Ok(())
}

/// Print resolved data paths.
pub fn handle_paths() -> Result<()> {
    println!("Data root:     {}", data_root()?.display());
    println!("Database path: {}", database_path()?.display());
    Ok(())
}
