//! Error types for the claimline library

use thiserror::Error;

/// Error type for comparison operations
#[derive(Debug, Error)]
pub enum Error {
    /// Unknown markup style token
    #[error("Unsupported markup style: {0}")]
    UnsupportedStyle(String),

    /// Failure reported by the diff engine for one claim pair
    #[error("Diff engine error: {0}")]
    Diff(String),
}

/// Result type for comparison operations
pub type Result<T> = std::result::Result<T, Error>;
