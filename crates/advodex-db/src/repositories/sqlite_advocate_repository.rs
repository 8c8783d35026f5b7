//! `SQLite` implementation of the `AdvocateRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use advodex_core::{
    Advocate, AdvocatePage, AdvocateRepository, NewAdvocate, RepositoryError, SearchFilter,
};

use super::row_mappers::{ADVOCATE_SELECT_COLUMNS, row_to_advocate};

/// WHERE clause for free-text search. The same pattern is bound once per
/// column; `specialties` is a JSON text column so a plain LIKE covers the
/// list entries too. SQLite's LIKE is already case-insensitive for ASCII.
/// Patterns come from [`like_pattern`], which uses `\` as the escape
/// character, hence the `ESCAPE` clauses.
const TEXT_MATCH_WHERE: &str = r"first_name LIKE ? ESCAPE '\' OR last_name LIKE ? ESCAPE '\' OR city LIKE ? ESCAPE '\' OR degree LIKE ? ESCAPE '\' OR specialties LIKE ? ESCAPE '\'";

/// Stable row ordering for directory pages.
const PAGE_ORDER: &str = "ORDER BY last_name, first_name, id";

/// `SQLite` implementation of the `AdvocateRepository` trait.
pub struct SqliteAdvocateRepository {
    pool: SqlitePool,
}

impl SqliteAdvocateRepository {
    /// Create a new `SQLite` advocate repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch_page(
        &self,
        filter: &SearchFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Advocate>, RepositoryError> {
        let rows = match filter {
            SearchFilter::All => {
                let query = format!(
                    "SELECT {ADVOCATE_SELECT_COLUMNS} FROM advocates {PAGE_ORDER} LIMIT ? OFFSET ?"
                );
                sqlx::query(&query)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await
            }
            SearchFilter::Text(term) => {
                let pattern = like_pattern(term);
                let query = format!(
                    "SELECT {ADVOCATE_SELECT_COLUMNS} FROM advocates WHERE {TEXT_MATCH_WHERE} {PAGE_ORDER} LIMIT ? OFFSET ?"
                );
                sqlx::query(&query)
                    .bind(&pattern)
                    .bind(&pattern)
                    .bind(&pattern)
                    .bind(&pattern)
                    .bind(&pattern)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await
            }
            SearchFilter::MinYears(years) => {
                let query = format!(
                    "SELECT {ADVOCATE_SELECT_COLUMNS} FROM advocates WHERE years_of_experience >= ? {PAGE_ORDER} LIMIT ? OFFSET ?"
                );
                sqlx::query(&query)
                    .bind(i64::from(*years))
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_advocate).collect()
    }

    async fn count_matching(&self, filter: &SearchFilter) -> Result<u64, RepositoryError> {
        let total: i64 = match filter {
            SearchFilter::All => {
                sqlx::query_scalar("SELECT COUNT(*) FROM advocates")
                    .fetch_one(&self.pool)
                    .await
            }
            SearchFilter::Text(term) => {
                let pattern = like_pattern(term);
                let query = format!("SELECT COUNT(*) FROM advocates WHERE {TEXT_MATCH_WHERE}");
                sqlx::query_scalar(&query)
                    .bind(&pattern)
                    .bind(&pattern)
                    .bind(&pattern)
                    .bind(&pattern)
                    .bind(&pattern)
                    .fetch_one(&self.pool)
                    .await
            }
            SearchFilter::MinYears(years) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM advocates WHERE years_of_experience >= ?")
                    .bind(i64::from(*years))
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(u64::try_from(total).unwrap_or(0))
    }
}

/// Build a `%term%` LIKE pattern from user input.
///
/// `\`, `%`, and `_` in the term are escaped so they match literally
/// instead of acting as wildcards; `TEXT_MATCH_WHERE` declares `\` as
/// the escape character.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_");
    format!("%{escaped}%")
}

#[async_trait]
impl AdvocateRepository for SqliteAdvocateRepository {
    async fn search(
        &self,
        filter: &SearchFilter,
        page: u32,
        page_size: u32,
    ) -> Result<AdvocatePage, RepositoryError> {
        let limit = i64::from(page_size);
        let offset = i64::from(page.saturating_sub(1)) * i64::from(page_size);

        let total = self.count_matching(filter).await?;
        let advocates = self.fetch_page(filter, limit, offset).await?;

        Ok(AdvocatePage {
            advocates,
            total,
            page,
            page_size,
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Advocate, RepositoryError> {
        let query = format!("SELECT {ADVOCATE_SELECT_COLUMNS} FROM advocates WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Advocate with ID {id}")))?;

        row_to_advocate(&row)
    }

    async fn insert(&self, advocate: &NewAdvocate) -> Result<Advocate, RepositoryError> {
        let specialties_json = serde_json::to_string(&advocate.specialties)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        let created_at = Utc::now();

        let result = sqlx::query(
            r#"INSERT INTO advocates (
                first_name, last_name, city, degree, specialties,
                years_of_experience, phone_number, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&advocate.first_name)
        .bind(&advocate.last_name)
        .bind(&advocate.city)
        .bind(&advocate.degree)
        .bind(&specialties_json)
        .bind(i64::from(advocate.years_of_experience))
        .bind(&advocate.phone_number)
        .bind(created_at.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM advocates")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        Ok(u64::try_from(total).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    fn advocate(first: &str, last: &str, city: &str, degree: &str, years: u32) -> NewAdvocate {
        NewAdvocate {
            first_name: first.to_string(),
            last_name: last.to_string(),
            city: city.to_string(),
            degree: degree.to_string(),
            specialties: vec!["Trauma & PTSD".to_string()],
            years_of_experience: years,
            phone_number: "555-000-0000".to_string(),
        }
    }

    async fn repo_with_fixtures() -> SqliteAdvocateRepository {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteAdvocateRepository::new(pool);
        repo.insert(&advocate("John", "Doe", "New York", "MD", 10))
            .await
            .unwrap();
        repo.insert(&advocate("Jane", "Smith", "Los Angeles", "PhD", 8))
            .await
            .unwrap();
        repo.insert(&NewAdvocate {
            specialties: vec!["Pediatrics".to_string(), "Sleep issues".to_string()],
            ..advocate("Alice", "Johnson", "Chicago", "MSW", 3)
        })
        .await
        .unwrap();
        repo
    }

    #[tokio::test]
    async fn insert_assigns_id_and_timestamp() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteAdvocateRepository::new(pool);

        let saved = repo
            .insert(&advocate("John", "Doe", "New York", "MD", 10))
            .await
            .unwrap();

        assert!(saved.id > 0);
        assert_eq!(saved.first_name, "John");
        assert_eq!(saved.specialties, vec!["Trauma & PTSD".to_string()]);

        let fetched = repo.get_by_id(saved.id).await.unwrap();
        assert_eq!(fetched.last_name, "Doe");
        assert_eq!(fetched.years_of_experience, 10);
    }

    #[tokio::test]
    async fn get_by_id_returns_not_found_for_missing_row() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteAdvocateRepository::new(pool);

        let err = repo.get_by_id(42).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn text_search_is_case_insensitive_across_fields() {
        let repo = repo_with_fixtures().await;

        // City, lowercased
        let page = repo
            .search(&SearchFilter::Text("new york".to_string()), 1, 10)
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.advocates[0].first_name, "John");

        // Last name fragment
        let page = repo
            .search(&SearchFilter::Text("SMITH".to_string()), 1, 10)
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.advocates[0].first_name, "Jane");

        // Degree
        let page = repo
            .search(&SearchFilter::Text("msw".to_string()), 1, 10)
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.advocates[0].first_name, "Alice");
    }

    #[tokio::test]
    async fn text_search_matches_specialties() {
        let repo = repo_with_fixtures().await;

        let page = repo
            .search(&SearchFilter::Text("pediatrics".to_string()), 1, 10)
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.advocates[0].first_name, "Alice");
    }

    #[tokio::test]
    async fn like_wildcards_in_terms_match_literally() {
        let repo = repo_with_fixtures().await;

        // A bare "%" must not match every row
        let page = repo
            .search(&SearchFilter::Text("%".to_string()), 1, 10)
            .await
            .unwrap();
        assert_eq!(page.total, 0);

        let page = repo
            .search(&SearchFilter::Text("100%".to_string()), 1, 10)
            .await
            .unwrap();
        assert_eq!(page.total, 0);

        // "_" would otherwise match any single character
        let page = repo
            .search(&SearchFilter::Text("_".to_string()), 1, 10)
            .await
            .unwrap();
        assert_eq!(page.total, 0);

        // A literal "%" in stored data stays findable
        repo.insert(&NewAdvocate {
            specialties: vec!["100% remote sessions".to_string()],
            ..advocate("Carol", "White", "Denver", "LCSW", 6)
        })
        .await
        .unwrap();

        let page = repo
            .search(&SearchFilter::Text("100%".to_string()), 1, 10)
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.advocates[0].first_name, "Carol");
    }

    #[tokio::test]
    async fn unmatched_term_returns_zero_rows_and_zero_total() {
        let repo = repo_with_fixtures().await;

        let page = repo
            .search(&SearchFilter::Text("zzzzzz".to_string()), 1, 10)
            .await
            .unwrap();
        assert!(page.advocates.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages(), 0);
        assert!(!page.has_more());
    }

    #[tokio::test]
    async fn min_years_filter_keeps_experienced_advocates() {
        let repo = repo_with_fixtures().await;

        let page = repo
            .search(&SearchFilter::MinYears(8), 1, 10)
            .await
            .unwrap();
        assert_eq!(page.total, 2);
        assert!(
            page.advocates
                .iter()
                .all(|a| a.years_of_experience >= 8)
        );
    }

    #[tokio::test]
    async fn pagination_windows_do_not_overlap() {
        let repo = repo_with_fixtures().await;

        let first = repo.search(&SearchFilter::All, 1, 2).await.unwrap();
        assert_eq!(first.advocates.len(), 2);
        assert_eq!(first.total, 3);
        assert_eq!(first.total_pages(), 2);
        assert!(first.has_more());

        let second = repo.search(&SearchFilter::All, 2, 2).await.unwrap();
        assert_eq!(second.advocates.len(), 1);
        assert_eq!(second.total, 3);
        assert!(!second.has_more());

        let first_ids: Vec<i64> = first.advocates.iter().map(|a| a.id).collect();
        assert!(!first_ids.contains(&second.advocates[0].id));
    }

    #[tokio::test]
    async fn page_beyond_last_is_empty_with_true_total() {
        let repo = repo_with_fixtures().await;

        let page = repo.search(&SearchFilter::All, 5, 10).await.unwrap();
        assert!(page.advocates.is_empty());
        assert_eq!(page.total, 3);
    }

    #[tokio::test]
    async fn count_reports_unfiltered_rows() {
        let repo = repo_with_fixtures().await;
        assert_eq!(repo.count().await.unwrap(), 3);
    }
}
