// Storage errors for the credential store
// Decision: Only user writes need a typed error (uniqueness must become 409),
// the rest of the storage layer reports through anyhow like any other plumbing

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// The email is already taken (unique constraint)
    #[error("email already registered")]
    DuplicateEmail,

    /// The store could not be reached or timed out
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                StorageError::DuplicateEmail
            }
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => StorageError::Unavailable(err.to_string()),
            other => StorageError::Other(other.into()),
        }
    }
}
