//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.

use axum::Router;
use axum::routing::get;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::error::HttpError;
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without the `/api` prefix (for nesting under /api).
///
/// Returns a router typed as `Router<AppState>` WITHOUT `.with_state()`
/// applied; the caller applies state before nesting.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/advocates", get(handlers::advocates::list))
        .route("/advocates/{id}", get(handlers::advocates::get))
}

/// Create the main Axum router with all API routes.
///
/// This creates the API routes only. For serving the browser UI, use
/// [`create_spa_router`] which adds static file serving with an
/// index.html fallback.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new().route("/health", get(health_check)).nest(
        "/api",
        api_routes()
            .with_state(state)
            .fallback(api_not_found)
            .layer(cors),
    )
}

/// Create a router with API routes and static asset serving.
///
/// 1. Serves API routes under `/api/*` and `/health`
/// 2. Serves static assets from `static_dir` for matching files
/// 3. Falls back to `index.html` for unmatched paths
pub fn create_spa_router<P: AsRef<Path>>(
    ctx: AxumContext,
    static_dir: P,
    cors_config: &CorsConfig,
) -> Router {
    let static_path = static_dir.as_ref();
    let index_path = static_path.join("index.html");

    // Static file serving with fallback to index.html for missing files
    let serve_dir = ServeDir::new(static_path).fallback(ServeFile::new(&index_path));

    // Unknown /api paths hit the JSON 404 fallback on the nested router,
    // so they never reach the SPA fallback below.
    let api = create_router(ctx, cors_config);

    api.fallback_service(serve_dir)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}

/// JSON 404 for unrecognized paths under `/api`.
async fn api_not_found() -> HttpError {
    HttpError::NotFound("Unknown API route".to_string())
}
