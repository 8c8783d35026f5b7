//! Advocate handlers - search and single-record reads.

use axum::Json;
use axum::extract::{Path, Query, State};

use crate::dto::{AdvocateDto, AdvocatesResponse, SearchParams};
use crate::error::HttpError;
use crate::state::AppState;

/// Search the directory: filtered, paginated advocate rows plus
/// pagination metadata.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<AdvocatesResponse>, HttpError> {
    let page = state.directory.search(params.into()).await?;
    Ok(Json(page.into()))
}

/// Get a single advocate by ID.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AdvocateDto>, HttpError> {
    Ok(Json(state.directory.get(id).await?.into()))
}
