//! Error types for AMFI data access.

use thiserror::Error;

use fundmetrics_core::error::CoreError;

/// A specialized Result type for AMFI operations.
pub type AmfiResult<T> = Result<T, AmfiError>;

/// Errors raised while fetching or caching AMFI data.
///
/// Every failure propagates to the caller as-is; this crate never
/// retries or swallows a provider error.
#[derive(Error, Debug)]
pub enum AmfiError {
    /// Transport-level failure talking to AMFI.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// AMFI answered with a non-success status.
    #[error("Provider error (status {status}): {body}")]
    Provider {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// A payload could not be parsed.
    #[error("Parsing error: {0}")]
    Parse(String),

    /// The scheme cache could not be read or written.
    #[error("Cache error: {0}")]
    Cache(String),

    /// Fetched data violated a series invariant.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<serde_json::Error> for AmfiError {
    fn from(err: serde_json::Error) -> Self {
        AmfiError::Parse(err.to_string())
    }
}

impl From<csv::Error> for AmfiError {
    fn from(err: csv::Error) -> Self {
        AmfiError::Cache(err.to_string())
    }
}

impl From<std::io::Error> for AmfiError {
    fn from(err: std::io::Error) -> Self {
        AmfiError::Cache(err.to_string())
    }
}

impl From<CoreError> for AmfiError {
    fn from(err: CoreError) -> Self {
        AmfiError::InvalidData(err.to_string())
    }
}
