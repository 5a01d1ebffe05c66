//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors. All data-access failures surface through this
/// taxonomy and propagate uncaught to the handler boundary.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Row not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
