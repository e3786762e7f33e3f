use async_trait::async_trait;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Movie;

/// Port for catalog service operations.
#[async_trait]
pub trait MovieServicePort: Send + Sync + 'static {
    /// List the whole catalog ordered by title.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn all_movies(&self) -> Result<Vec<Movie>, MovieError>;
}

/// Persistence operations for the catalog.
#[async_trait]
pub trait MovieRepository: Send + Sync + 'static {
    /// Retrieve every movie ordered by title.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Movie>, MovieError>;
}
