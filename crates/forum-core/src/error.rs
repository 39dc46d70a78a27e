//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures.
///
/// Absent data (no revisions, no votes, no viewer) is never an error; it
/// resolves to `false` or `None` at the call site.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

/// Repository-level errors raised by storage collaborators.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
