//! Path resolution for advodex data.
//!
//! All filesystem locations are resolved here so that adapters never
//! hardcode paths. Every location can be overridden through an
//! environment variable, which is also how tests point the app at
//! throwaway directories.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable overriding the data root directory.
pub const DATA_DIR_ENV: &str = "ADVODEX_DATA_DIR";

/// Environment variable overriding the database file path.
pub const DB_PATH_ENV: &str = "ADVODEX_DB_PATH";

/// Errors from path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// The user's home directory could not be determined.
    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// Resolve the data root directory.
///
/// Honors `ADVODEX_DATA_DIR` when set, otherwise `~/.advodex`.
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".advodex"))
        .ok_or(PathError::NoHomeDir)
}

/// Resolve the SQLite database file path.
///
/// Honors `ADVODEX_DB_PATH` when set, otherwise `<data_root>/advodex.db`.
pub fn database_path() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DB_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    Ok(data_root()?.join("advodex.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_path_lives_under_data_root() {
        // Only check the relationship when no env overrides are set, so
        // this test stays independent of the environment it runs in.
        if env::var(DATA_DIR_ENV).is_err() && env::var(DB_PATH_ENV).is_err() {
            let root = data_root().unwrap();
            let db = database_path().unwrap();
            assert!(db.starts_with(&root));
            assert_eq!(db.file_name().unwrap(), "advodex.db");
        }
    }
}
