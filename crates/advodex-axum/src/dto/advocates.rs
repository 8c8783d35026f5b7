//! Advocate endpoint DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use advodex_core::{Advocate, AdvocatePage, DEFAULT_PAGE_SIZE, DirectoryQuery};

/// Query parameters for `GET /api/advocates`.
///
/// `search` is the free-text term; `page` is 1-based. Missing parameters
/// fall back to the first page at the default size.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl From<SearchParams> for DirectoryQuery {
    fn from(params: SearchParams) -> Self {
        Self {
            term: params.search,
            page: params.page,
            page_size: params.page_size,
        }
    }
}

/// Wire representation of one advocate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvocateDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: u32,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

impl From<Advocate> for AdvocateDto {
    fn from(a: Advocate) -> Self {
        Self {
            id: a.id,
            first_name: a.first_name,
            last_name: a.last_name,
            city: a.city,
            degree: a.degree,
            specialties: a.specialties,
            years_of_experience: a.years_of_experience,
            phone_number: a.phone_number,
            created_at: a.created_at,
        }
    }
}

/// Pagination metadata returned alongside every page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub page: u32,
    pub page_size: u32,
    /// Total rows matching the filter, not the page length.
    pub total: u64,
    pub total_pages: u64,
    pub has_more: bool,
}

/// Response body for `GET /api/advocates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvocatesResponse {
    pub data: Vec<AdvocateDto>,
    pub pagination: PaginationDto,
}

impl From<AdvocatePage> for AdvocatesResponse {
    fn from(page: AdvocatePage) -> Self {
        let pagination = PaginationDto {
            page: page.page,
            page_size: page.page_size,
            total: page.total,
            total_pages: page.total_pages(),
            has_more: page.has_more(),
        };
        Self {
            data: page.advocates.into_iter().map(AdvocateDto::from).collect(),
            pagination,
        }
    }
}
