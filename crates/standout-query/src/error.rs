//! Error types for the query crate.
//!
//! Category mismatches never show up here: an unsupported conversion or a
//! cross-category merge has no trait implementation and fails to compile.

use thiserror::Error;

/// Errors that can occur when building query predicates.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
