//! Repository trait for categories.

use crate::domain::entities::{Category, NewCategory};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for categories.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCategoryRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryDatastore`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Inserts a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on datastore errors.
    async fn insert(&self, new_category: NewCategory) -> Result<(), AppError>;

    /// Lists all categories ordered by name ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on datastore errors.
    async fn list(&self) -> Result<Vec<Category>, AppError>;
}
