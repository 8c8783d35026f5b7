//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated
//! here.

use std::path::PathBuf;

use anyhow::Result;
use sqlx::SqlitePool;

use advodex_core::DirectoryService;
use advodex_core::paths::database_path;
use advodex_db::{DbFactory, setup_database};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Override for the SQLite database path; `None` resolves the
    /// default via `advodex_core::paths`.
    pub db_path: Option<PathBuf>,
    /// Optional path to static assets for the browser UI.
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with defaults: API-only on port 9887, default
    /// database location.
    pub fn with_defaults() -> Self {
        Self {
            port: 9887,
            db_path: None,
            static_dir: None,
            cors: CorsConfig::default(),
        }
    }

    /// Set the static directory for UI serving.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Override the database file path.
    #[must_use]
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds the initialized services the handlers depend on.
pub struct AxumContext {
    /// The directory service facade.
    pub directory: DirectoryService,
}

/// Bootstrap the web adapter with all services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let db_path = match &config.db_path {
        Some(path) => path.clone(),
        None => database_path()?,
    };

    tracing::info!(
        target: "advodex.paths",
        database_path = %db_path.display(),
        "axum bootstrap resolved paths"
    );

    let pool = setup_database(&db_path).await?;
    Ok(bootstrap_with_pool(pool))
}

/// Build an `AxumContext` from an existing pool.
///
/// Integration tests use this with an in-memory database.
pub fn bootstrap_with_pool(pool: SqlitePool) -> AxumContext {
    AxumContext {
        directory: DbFactory::directory_service(pool),
    }
}

/// Start the web server on the configured port.
///
/// If `config.static_dir` is set, serves the browser UI alongside the
/// API. Otherwise serves only the API endpoints.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;

    let app = if let Some(ref static_dir) = config.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
        crate::routes::create_spa_router(ctx, static_dir, &config.cors)
    } else {
        crate::routes::create_router(ctx, &config.cors)
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    if config.static_dir.is_some() {
        info!("advodex server (with UI) listening on http://{}", addr);
    } else {
        info!("advodex server (API only) listening on http://{}", addr);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
