//! Seed corpus for the advocate directory.
//!
//! The directory has no write UI; records enter the system through this
//! deterministic seed. Seeding is idempotent: a non-empty table is left
//! alone unless `force` is set.

use anyhow::Result;
use sqlx::SqlitePool;

use advodex_core::{AdvocateRepository, NewAdvocate};

use crate::repositories::SqliteAdvocateRepository;

/// Specialty catalog the seed advocates draw from.
pub const SPECIALTIES: &[&str] = &[
    "Bipolar",
    "LGBTQ",
    "Medication/Prescribing",
    "General Mental Health (anxiety, depression, stress, grief, life transitions)",
    "Men's issues",
    "Relationship Issues (family, friends, couple, etc)",
    "Trauma & PTSD",
    "Personality disorders",
    "Personal growth",
    "Substance use/abuse",
    "Pediatrics",
    "Women's issues (post-partum, infertility, family planning)",
    "Chronic pain",
    "Weight loss & nutrition",
    "Eating disorders",
    "Diabetic Diet and nutrition",
    "Coaching (leadership, career, academic and wellness)",
    "Life coaching",
    "Obsessive-compulsive disorders",
    "Attention and Hyperactivity (ADHD)",
    "Sleep issues",
    "Schizophrenia and psychotic disorders",
    "Learning disorders",
    "Domestic abuse",
];

/// Build the deterministic seed corpus.
///
/// Specialties are picked by index from the catalog so repeated seeds
/// produce identical data.
pub fn seed_corpus() -> Vec<NewAdvocate> {
    let entries: &[(&str, &str, &str, &str, &[usize], u32, &str)] = &[
        ("John", "Doe", "New York", "MD", &[0, 3], 10, "555-123-4567"),
        ("Jane", "Smith", "Los Angeles", "PhD", &[1, 6], 8, "555-234-5678"),
        ("Alice", "Johnson", "Chicago", "MSW", &[10, 20], 5, "555-345-6789"),
        ("Michael", "Brown", "Houston", "MD", &[2, 9], 12, "555-456-7890"),
        ("Emily", "Davis", "Phoenix", "PhD", &[11, 14], 7, "555-567-8901"),
        ("Chris", "Martinez", "Philadelphia", "MSW", &[5, 8], 9, "555-678-9012"),
        ("Jessica", "Taylor", "San Antonio", "MD", &[12, 13], 11, "555-789-0123"),
        ("David", "Harris", "San Diego", "PhD", &[4, 18], 6, "555-890-1234"),
        ("Laura", "Clark", "Dallas", "MSW", &[19, 22], 4, "555-901-2345"),
        ("Daniel", "Lewis", "San Jose", "MD", &[21, 7], 13, "555-012-3456"),
        ("Sarah", "Lee", "Austin", "PhD", &[3, 15], 10, "555-123-4568"),
        ("James", "King", "Jacksonville", "MSW", &[16, 17], 5, "555-234-5679"),
        ("Megan", "Green", "San Francisco", "MD", &[6, 23], 14, "555-345-6780"),
        ("Joshua", "Walker", "Columbus", "PhD", &[9, 3], 9, "555-456-7891"),
        ("Amanda", "Hall", "Charlotte", "MSW", &[14, 11], 3, "555-567-8902"),
    ];

    entries
        .iter()
        .map(|(first, last, city, degree, specialty_idx, years, phone)| NewAdvocate {
            first_name: (*first).to_string(),
            last_name: (*last).to_string(),
            city: (*city).to_string(),
            degree: (*degree).to_string(),
            specialties: specialty_idx
                .iter()
                .map(|&i| SPECIALTIES[i].to_string())
                .collect(),
            years_of_experience: *years,
            phone_number: (*phone).to_string(),
        })
        .collect()
}

/// Populate the advocates table with the seed corpus.
///
/// Returns the number of rows inserted. A non-empty table is skipped
/// unless `force` is set, in which case existing rows are replaced.
pub async fn seed_advocates(pool: &SqlitePool, force: bool) -> Result<u64> {
    let repo = SqliteAdvocateRepository::new(pool.clone());

    let existing = repo.count().await?;
    if existing > 0 {
        if !force {
            tracing::info!(existing, "advocates table already seeded, skipping");
            return Ok(0);
        }
        sqlx::query("DELETE FROM advocates").execute(pool).await?;
        tracing::info!(removed = existing, "cleared advocates table for reseed");
    }

    let corpus = seed_corpus();
    let inserted = corpus.len() as u64;
    for advocate in &corpus {
        repo.insert(advocate).await?;
    }

    tracing::info!(inserted, "seeded advocates table");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    #[tokio::test]
    async fn seed_populates_empty_table() {
        let pool = setup_test_database().await.unwrap();

        let inserted = seed_advocates(&pool, false).await.unwrap();
        assert_eq!(inserted, 15);

        let repo = SqliteAdvocateRepository::new(pool);
        assert_eq!(repo.count().await.unwrap(), 15);
    }

    #[tokio::test]
    async fn seed_is_idempotent_without_force() {
        let pool = setup_test_database().await.unwrap();

        seed_advocates(&pool, false).await.unwrap();
        let second = seed_advocates(&pool, false).await.unwrap();
        assert_eq!(second, 0);

        let repo = SqliteAdvocateRepository::new(pool);
        assert_eq!(repo.count().await.unwrap(), 15);
    }

    #[tokio::test]
    async fn force_reseed_replaces_rows() {
        let pool = setup_test_database().await.unwrap();

        seed_advocates(&pool, false).await.unwrap();
        let reseeded = seed_advocates(&pool, true).await.unwrap();
        assert_eq!(reseeded, 15);

        let repo = SqliteAdvocateRepository::new(pool);
        assert_eq!(repo.count().await.unwrap(), 15);
    }

    #[test]
    fn corpus_specialties_come_from_the_catalog() {
        for advocate in seed_corpus() {
            assert!(!advocate.specialties.is_empty());
            for specialty in &advocate.specialties {
                assert!(SPECIALTIES.contains(&specialty.as_str()));
            }
        }
    }
}
