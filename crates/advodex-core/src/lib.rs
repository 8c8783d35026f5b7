//! Core domain types and port definitions for advodex.
//!
//! This crate holds everything the adapters share: the `Advocate` entity,
//! directory query types, the repository port, and the `DirectoryService`
//! facade. It contains no storage or transport code and no `sqlx`/`axum`
//! types in any signature.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    Advocate, AdvocatePage, DEFAULT_PAGE_SIZE, DirectoryQuery, MAX_PAGE_SIZE, NewAdvocate,
    SearchFilter,
};
pub use paths::{PathError, data_root, database_path};
pub use ports::{AdvocateRepository, CoreError, RepositoryError};
pub use services::DirectoryService;
