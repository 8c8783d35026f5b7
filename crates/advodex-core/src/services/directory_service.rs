//! Directory service - orchestrates advocate search and reads.

use std::sync::Arc;

use crate::domain::{
    Advocate, AdvocatePage, DirectoryQuery, MAX_PAGE_SIZE, NewAdvocate, SearchFilter,
};
use crate::ports::{AdvocateRepository, CoreError};

/// Service for directory operations.
///
/// This service sits between the adapters and the repository: it clamps
/// pagination input, interprets the raw search term, and delegates the
/// actual data access to the injected `AdvocateRepository`.
pub struct DirectoryService {
    repo: Arc<dyn AdvocateRepository>,
}

impl DirectoryService {
    /// Create a new directory service with the given repository.
    pub fn new(repo: Arc<dyn AdvocateRepository>) -> Self {
        Self { repo }
    }

    /// Search the directory.
    ///
    /// The raw term is interpreted here: blank means "everything", a
    /// `"<N> years"` term becomes a minimum-experience filter, anything
    /// else is a case-insensitive text match. Page numbers below 1 and
    /// page sizes outside `1..=MAX_PAGE_SIZE` are clamped.
    pub async fn search(&self, query: DirectoryQuery) -> Result<AdvocatePage, CoreError> {
        let page = query.page.max(1);
        let page_size = query.page_size.clamp(1, MAX_PAGE_SIZE);

        let filter = SearchFilter::parse(query.term.as_deref());
        if let SearchFilter::MinYears(years) = filter {
            tracing::debug!(
                term = query.term.as_deref().unwrap_or_default(),
                min_years = years,
                "interpreted search term as experience filter"
            );
        }

        self.repo
            .search(&filter, page, page_size)
            .await
            .map_err(CoreError::from)
    }

    /// Get an advocate by its database ID.
    pub async fn get(&self, id: i64) -> Result<Advocate, CoreError> {
        self.repo.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Add a new advocate to the directory.
    pub async fn add(&self, advocate: NewAdvocate) -> Result<Advocate, CoreError> {
        if advocate.first_name.trim().is_empty() || advocate.last_name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Advocate first and last name must not be empty".to_string(),
            ));
        }
        self.repo.insert(&advocate).await.map_err(CoreError::from)
    }

    /// Total number of advocates in the directory.
    pub async fn count(&self) -> Result<u64, CoreError> {
        self.repo.count().await.map_err(CoreError::from)
    }
}
