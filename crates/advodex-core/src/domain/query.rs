//! Directory query types: search term interpretation and pagination.

use serde::{Deserialize, Serialize};

use super::Advocate;

/// Default number of rows per page when the caller doesn't specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound on rows per page. Larger requests are clamped.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A directory search request as received from a caller.
///
/// `page` is 1-based. Values outside the valid ranges are clamped by
/// `DirectoryService`, not rejected.
#[derive(Debug, Clone)]
pub struct DirectoryQuery {
    /// Free-text search term. `None` or blank means "list everything".
    pub term: Option<String>,
    /// 1-based page number.
    pub page: u32,
    /// Rows per page.
    pub page_size: u32,
}

impl Default for DirectoryQuery {
    fn default() -> Self {
        Self {
            term: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// The interpreted form of a raw search term.
///
/// A term shaped like `"<N> years"` is reinterpreted as a minimum
/// years-of-experience filter; everything else is a case-insensitive
/// substring match over the advocate's text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilter {
    /// No filtering; return every advocate.
    All,
    /// Substring match against first name, last name, city, degree,
    /// and the specialties list.
    Text(String),
    /// Minimum years of experience.
    MinYears(u32),
}

impl SearchFilter {
    /// Interpret a raw search term.
    ///
    /// Blank terms map to `All`. Terms of the form `"10 years"`,
    /// `"10+ years"`, or `"1 year"` (case-insensitive) map to
    /// `MinYears`; anything else becomes a `Text` filter.
    pub fn parse(term: Option<&str>) -> Self {
        let Some(raw) = term else {
            return Self::All;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::All;
        }
        if let Some(years) = parse_years_term(trimmed) {
            return Self::MinYears(years);
        }
        Self::Text(trimmed.to_string())
    }
}

/// Parse a `"<N> years"` style term into a minimum-experience threshold.
///
/// Returns `None` when the term doesn't have that shape, in which case
/// it is treated as ordinary text.
fn parse_years_term(term: &str) -> Option<u32> {
    let lower = term.to_ascii_lowercase();
    let rest = lower
        .strip_suffix("years")
        .or_else(|| lower.strip_suffix("year"))?;
    let rest = rest.trim_end();
    let rest = rest.strip_suffix('+').unwrap_or(rest).trim_end();
    // Bare "years" with no number is a text search, not a filter
    if rest.is_empty() {
        return None;
    }
    rest.parse::<u32>().ok()
}

/// One page of directory results plus the total matching row count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvocatePage {
    /// The rows on this page (at most `page_size` of them).
    pub advocates: Vec<Advocate>,
    /// Total row count for the applied filter, NOT the page length.
    pub total: u64,
    /// 1-based page number this page was fetched for.
    pub page: u32,
    /// Requested rows per page.
    pub page_size: u32,
}

impl AdvocatePage {
    /// Number of pages needed to cover `total` rows.
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.page_size.max(1)))
    }

    /// Whether pages after this one exist.
    pub fn has_more(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_terms_map_to_all() {
        assert_eq!(SearchFilter::parse(None), SearchFilter::All);
        assert_eq!(SearchFilter::parse(Some("")), SearchFilter::All);
        assert_eq!(SearchFilter::parse(Some("   ")), SearchFilter::All);
    }

    #[test]
    fn years_terms_become_min_years_filters() {
        assert_eq!(
            SearchFilter::parse(Some("10 years")),
            SearchFilter::MinYears(10)
        );
        assert_eq!(
            SearchFilter::parse(Some("3 Years")),
            SearchFilter::MinYears(3)
        );
        assert_eq!(
            SearchFilter::parse(Some("1 year")),
            SearchFilter::MinYears(1)
        );
        assert_eq!(
            SearchFilter::parse(Some("10+ years")),
            SearchFilter::MinYears(10)
        );
        assert_eq!(
            SearchFilter::parse(Some("  7 years  ")),
            SearchFilter::MinYears(7)
        );
    }

    #[test]
    fn non_numeric_terms_stay_textual() {
        assert_eq!(
            SearchFilter::parse(Some("years")),
            SearchFilter::Text("years".to_string())
        );
        assert_eq!(
            SearchFilter::parse(Some("many years")),
            SearchFilter::Text("many years".to_string())
        );
        assert_eq!(
            SearchFilter::parse(Some("New York")),
            SearchFilter::Text("New York".to_string())
        );
        // Trailing text after the number breaks the pattern
        assert_eq!(
            SearchFilter::parse(Some("10 years experience")),
            SearchFilter::Text("10 years experience".to_string())
        );
    }

    fn page(total: u64, page: u32, page_size: u32) -> AdvocatePage {
        AdvocatePage {
            advocates: Vec::new(),
            total,
            page,
            page_size,
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(page(0, 1, 10).total_pages(), 0);
        assert_eq!(page(1, 1, 10).total_pages(), 1);
        assert_eq!(page(10, 1, 10).total_pages(), 1);
        assert_eq!(page(11, 1, 10).total_pages(), 2);
        assert_eq!(page(15, 1, 10).total_pages(), 2);
    }

    #[test]
    fn has_more_reflects_remaining_pages() {
        assert!(page(15, 1, 10).has_more());
        assert!(!page(15, 2, 10).has_more());
        assert!(!page(0, 1, 10).has_more());
        assert!(!page(10, 1, 10).has_more());
    }
}
