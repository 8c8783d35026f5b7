//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Repository traits are minimal and read-heavy: the directory has no
//!   modeled updates or deletes

pub mod advocate_repository;

use thiserror::Error;

pub use advocate_repository::AdvocateRepository;

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g.,
/// sqlx errors) and provides a clean interface for services to handle
/// storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters map this to their own surfaces (HTTP status codes, CLI exit
/// codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
