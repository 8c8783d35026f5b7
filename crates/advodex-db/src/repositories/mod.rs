//! SQLite repository implementations.

pub mod row_mappers;
pub mod sqlite_advocate_repository;

pub use sqlite_advocate_repository::SqliteAdvocateRepository;
