//! Error types for the database layer.

use ranger_host::HostError;
use thiserror::Error;

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

/// Errors that can occur while reading the host database.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Table prefix contains characters that cannot appear in an identifier.
    #[error("invalid table prefix: {0:?}")]
    InvalidPrefix(String),

    /// A PHP-serialized option value could not be decoded.
    #[error("decode error at byte {offset}: {message}")]
    Decode { offset: usize, message: String },

    /// The connection lock was poisoned by a panicking reader.
    #[error("connection lock poisoned")]
    LockPoisoned,
}

impl From<DbError> for HostError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Database(e) => HostError::Query(e.to_string()),
            err @ DbError::Decode { .. } => HostError::Decode(err.to_string()),
            err @ (DbError::InvalidPrefix(_) | DbError::LockPoisoned) => {
                HostError::Unavailable(err.to_string())
            }
        }
    }
}
