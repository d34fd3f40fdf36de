//! Category management service.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::{Category, DEFAULT_CATEGORY_COLOR, NewCategory};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;
use crate::utils::slug::slugify;
use crate::utils::validation::{require_hex_color, require_non_empty};

/// Service for listing and creating categories.
pub struct CategoryService<R: CategoryRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CategoryRepository + ?Sized> CategoryService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all categories ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on datastore errors.
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.repository.list().await
    }

    /// Creates a category.
    ///
    /// `description` defaults to an empty string and `color` to
    /// [`DEFAULT_CATEGORY_COLOR`]. The slug is derived from `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `name` is empty or `color` is not a
    /// hex color.
    /// Returns [`AppError::Internal`] on datastore errors.
    pub async fn create_category(
        &self,
        name: String,
        description: Option<String>,
        color: Option<String>,
    ) -> Result<(), AppError> {
        require_non_empty("name", &name)?;

        let color = color.unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string());
        require_hex_color(&color)?;

        let slug = slugify(&name);
        self.repository
            .insert(NewCategory {
                name,
                description: description.unwrap_or_default(),
                color,
                slug: slug.clone(),
            })
            .await?;

        info!(%slug, "Category created");
        Ok(())
    }
}
