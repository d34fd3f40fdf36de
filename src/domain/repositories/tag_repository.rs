//! Repository trait for tags.

use crate::domain::entities::{NewTag, Tag};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for tags.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Inserts a tag.
    async fn insert(&self, new_tag: NewTag) -> Result<(), AppError>;

    /// Lists all tags ordered by name ascending.
    async fn list(&self) -> Result<Vec<Tag>, AppError>;
}
