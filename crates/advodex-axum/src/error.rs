//! Axum-specific error types and mappings.
//!
//! This module provides the adapter error type and the mapping from
//! `CoreError` to HTTP status codes and response bodies. Storage and
//! internal failures collapse to a generic message at this boundary;
//! the detail goes to the tracing log only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use advodex_core::{CoreError, RepositoryError};

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Validation(msg) => HttpError::BadRequest(msg),
            CoreError::Internal(msg) => {
                tracing::error!(detail = %msg, "internal error at request boundary");
                HttpError::Internal("Internal server error".to_string())
            }
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => HttpError::NotFound(msg),
            RepositoryError::Storage(msg) | RepositoryError::Serialization(msg) => {
                tracing::error!(detail = %msg, "storage error at request boundary");
                HttpError::Internal("Internal server error".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err: HttpError = CoreError::Repository(RepositoryError::NotFound(
            "Advocate with ID 7".to_string(),
        ))
        .into();
        assert!(matches!(err, HttpError::NotFound(_)));
    }

    #[test]
    fn storage_errors_are_generic_at_the_boundary() {
        let err: HttpError =
            CoreError::Repository(RepositoryError::Storage("disk on fire".to_string())).into();
        match err {
            HttpError::Internal(msg) => {
                assert_eq!(msg, "Internal server error");
                assert!(!msg.contains("disk"));
            }
            other => panic!("expected Internal, got {other:?}"),
        }
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let err: HttpError = CoreError::Validation("bad input".to_string()).into();
        assert!(matches!(err, HttpError::BadRequest(_)));
    }
}
