//! Row mapping helpers for `SQLite` queries.

use advodex_core::{Advocate, RepositoryError};
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::Row;

/// Shared SELECT column list for advocate queries.
pub const ADVOCATE_SELECT_COLUMNS: &str =
    "id, first_name, last_name, city, degree, specialties, years_of_experience, phone_number, created_at";

/// Helper to parse datetime strings that may have "UTC" suffix.
pub fn parse_datetime(datetime_str: Option<String>) -> Option<DateTime<Utc>> {
    datetime_str.and_then(|s| {
        let trimmed = s.trim_end_matches(" UTC");
        NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
            .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
            .ok()
    })
}

/// Parse a database row into an Advocate.
pub fn row_to_advocate(row: &sqlx::sqlite::SqliteRow) -> Result<Advocate, RepositoryError> {
    let specialties_json: String = row
        .try_get("specialties")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    let specialties: Vec<String> = serde_json::from_str(&specialties_json)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

    let years: i64 = row
        .try_get("years_of_experience")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    let created_at_str: Option<String> = row
        .try_get("created_at")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    Ok(Advocate {
        id: row
            .try_get::<i64, _>("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        first_name: row
            .try_get("first_name")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        last_name: row
            .try_get("last_name")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        city: row
            .try_get("city")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        degree: row
            .try_get("degree")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        specialties,
        years_of_experience: u32::try_from(years.max(0)).unwrap_or(0),
        phone_number: row
            .try_get("phone_number")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        created_at: parse_datetime(created_at_str).unwrap_or_else(Utc::now),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_datetime_format() {
        // DateTime<Utc>::to_string produces this shape
        let parsed = parse_datetime(Some("2024-03-05 10:30:00.123 UTC".to_string()));
        assert!(parsed.is_some());

        let parsed = parse_datetime(Some("2024-03-05 10:30:00".to_string()));
        assert!(parsed.is_some());

        assert!(parse_datetime(Some("not a date".to_string())).is_none());
        assert!(parse_datetime(None).is_none());
    }
}
