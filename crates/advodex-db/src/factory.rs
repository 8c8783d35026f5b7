//! Composition utilities for wiring core services to `SQLite` backends.
//!
//! This module is focused purely on construction and contains no domain
//! logic. Adapters call these helpers from their bootstrap code.

use sqlx::SqlitePool;
use std::sync::Arc;

use advodex_core::{AdvocateRepository, DirectoryService};

use crate::repositories::SqliteAdvocateRepository;

/// Factory for creating repository and service instances with `SQLite`
/// backends.
pub struct DbFactory;

impl DbFactory {
    /// Create a `SQLite` connection pool from a connection URL.
    ///
    /// Prefer `setup_database()` for file-backed databases; this is for
    /// callers that already have a URL (e.g. `sqlite::memory:`).
    pub async fn create_pool(db_url: &str) -> anyhow::Result<SqlitePool> {
        let pool = SqlitePool::connect(db_url).await?;
        Ok(pool)
    }

    /// Create an advocate repository from a pool.
    pub fn advocate_repository(pool: SqlitePool) -> Arc<SqliteAdvocateRepository> {
        Arc::new(SqliteAdvocateRepository::new(pool))
    }

    /// Build a fully wired `DirectoryService` from a pool.
    ///
    /// This is the recommended single-step way for adapters to obtain
    /// the service.
    pub fn directory_service(pool: SqlitePool) -> DirectoryService {
        let repo: Arc<dyn AdvocateRepository> = Self::advocate_repository(pool);
        DirectoryService::new(repo)
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create an advocate repository using this test database.
    pub fn advocate_repository(&self) -> SqliteAdvocateRepository {
        SqliteAdvocateRepository::new(self.pool.clone())
    }

    /// Create a directory service using this test database.
    pub fn directory_service(&self) -> DirectoryService {
        DbFactory::directory_service(self.pool.clone())
    }
}
