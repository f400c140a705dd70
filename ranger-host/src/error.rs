//! Error types for host capability calls.

use thiserror::Error;

/// Result type for host capability calls.
pub type HostResult<T> = Result<T, HostError>;

/// Errors a host capability can report back to the report.
#[derive(Debug, Error)]
pub enum HostError {
    /// The underlying store rejected or failed a query.
    #[error("query failed: {0}")]
    Query(String),

    /// Stored data could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The capability is not reachable (connection lost, lock poisoned).
    #[error("host unavailable: {0}")]
    Unavailable(String),
}
