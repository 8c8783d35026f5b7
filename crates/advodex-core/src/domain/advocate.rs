//! Advocate entity types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An advocate that exists in the directory with a database ID.
///
/// This represents a persisted record with all its fields. Use
/// `NewAdvocate` for records that haven't been persisted yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advocate {
    /// Database ID of the advocate (always present for persisted records).
    pub id: i64,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// City the advocate practices in.
    pub city: String,
    /// Credential, e.g. "MD", "PhD", "MSW".
    pub degree: String,
    /// Specialty labels the advocate covers.
    pub specialties: Vec<String>,
    /// Years of professional experience.
    pub years_of_experience: u32,
    /// Contact phone number.
    pub phone_number: String,
    /// UTC timestamp of when the record was created.
    pub created_at: DateTime<Utc>,
}

impl Advocate {
    /// Full display name, "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An advocate to be inserted into the directory (no ID yet).
///
/// The repository assigns the ID and `created_at` timestamp on insert
/// and returns the persisted `Advocate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAdvocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: u32,
    pub phone_number: String,
}
