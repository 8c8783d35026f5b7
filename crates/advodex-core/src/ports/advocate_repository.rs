//! Advocate repository trait definition.
//!
//! This port defines the interface for advocate persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Advocate, AdvocatePage, NewAdvocate, SearchFilter};

/// Repository for advocate persistence operations.
///
/// Term interpretation and page/page-size clamping belong in
/// `DirectoryService`; implementations receive an already-parsed filter
/// and validated pagination window.
#[async_trait]
pub trait AdvocateRepository: Send + Sync {
    /// Fetch one page of advocates matching `filter`, plus the total
    /// matching row count.
    ///
    /// `page` is 1-based. A page beyond the last yields an empty page
    /// with the true total.
    async fn search(
        &self,
        filter: &SearchFilter,
        page: u32,
        page_size: u32,
    ) -> Result<AdvocatePage, RepositoryError>;

    /// Get an advocate by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the record doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Advocate, RepositoryError>;

    /// Insert a new advocate.
    ///
    /// Returns the persisted record with its assigned ID and timestamp.
    async fn insert(&self, advocate: &NewAdvocate) -> Result<Advocate, RepositoryError>;

    /// Total number of advocates in the directory, unfiltered.
    async fn count(&self) -> Result<u64, RepositoryError>;
}
