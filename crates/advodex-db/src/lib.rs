//! SQLite adapter for advodex.
//!
//! Implements the `AdvocateRepository` port from `advodex-core` on top of
//! sqlx/SQLite, and owns schema setup and the seed corpus. Nothing above
//! this crate sees a `SqlitePool` except at composition roots.

pub mod factory;
pub mod repositories;
pub mod seed;
pub mod setup;

// Re-export factory for convenient access
pub use factory::DbFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

// Re-export repository implementation
pub use repositories::SqliteAdvocateRepository;

// Re-export seeding and setup for convenient access
pub use seed::seed_advocates;
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
