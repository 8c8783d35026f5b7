//! HTTP request handlers.

pub mod advocates;
