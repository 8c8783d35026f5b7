//! Axum web adapter for advodex.
//!
//! Exposes the advocate directory over HTTP: one paginated search
//! endpoint plus a single-record read, with optional static/SPA serving
//! for the browser UI. `bootstrap` is the composition root; handlers
//! only ever see the `DirectoryService` facade.

#![deny(unused_crate_dependencies)]

// Dev-dependencies used by the integration tests in tests/
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{
    AxumContext, CorsConfig, ServerConfig, bootstrap, bootstrap_with_pool, start_server,
};
pub use error::HttpError;
pub use routes::{create_router, create_spa_router};
pub use state::AppState;
