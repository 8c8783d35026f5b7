//! Domain types for the advocate directory.
//!
//! These types represent advocates and directory queries independent of
//! any infrastructure concerns (database, HTTP, etc.).

pub mod advocate;
pub mod query;

pub use advocate::{Advocate, NewAdvocate};
pub use query::{
    AdvocatePage, DEFAULT_PAGE_SIZE, DirectoryQuery, MAX_PAGE_SIZE, SearchFilter,
};
