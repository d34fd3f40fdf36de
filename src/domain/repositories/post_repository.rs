//! Repository trait for posts.

use crate::domain::entities::{NewPost, Post};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for posts.
///
/// Listing returns raw posts; resolving `category_id` to a category name and
/// color is done by [`crate::application::services::PostService`], so any
/// backend only has to store and return rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Inserts a post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `category_id` does not reference an
    /// existing category.
    /// Returns [`AppError::Internal`] on datastore errors.
    async fn insert(&self, new_post: NewPost) -> Result<(), AppError>;

    /// Lists all posts, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on datastore errors.
    async fn list(&self) -> Result<Vec<Post>, AppError>;
}
