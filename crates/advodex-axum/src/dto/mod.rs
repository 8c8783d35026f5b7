//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! These types define the stable HTTP API contract with explicit
//! serialization control. They decouple internal domain types from the
//! camelCase JSON the browser UI consumes.

pub mod advocates;

pub use advocates::{AdvocateDto, AdvocatesResponse, PaginationDto, SearchParams};
