use thiserror::Error;

/// Errors raised by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested slot overlaps an existing booking.
    #[error("slot overlaps an existing booking")]
    Conflict,
    /// A stored row could not be turned into a domain value.
    #[error("validation error: {0}")]
    ValidationError(String),
    /// No connection could be checked out of the pool.
    #[error("connection error: {0}")]
    ConnectionError(#[from] diesel::r2d2::PoolError),
    /// The database rejected a statement.
    #[error("database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),
    /// Schema migrations failed to apply.
    #[error("migration error: {0}")]
    Migration(String),
}

/// Convenient alias for repository results.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
