//! Storage Errors
//!
//! Error type returned by every repository port. These never cross the
//! service boundary; application services collapse them into their own
//! per-operation error.

use thiserror::Error;

/// Storage layer errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Driver, connection or statement failure
    #[error("Query failed: {0}")]
    Query(String),

    /// A row came back in a shape the domain cannot represent
    #[error("Malformed row: {0}")]
    Decode(String),
}

impl StorageError {
    pub fn query<E: std::fmt::Display>(err: E) -> Self {
        Self::Query(err.to_string())
    }
}
