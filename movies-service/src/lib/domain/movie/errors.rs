use thiserror::Error;

/// Top-level error for catalog operations
#[derive(Debug, Clone, Error)]
pub enum MovieError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
