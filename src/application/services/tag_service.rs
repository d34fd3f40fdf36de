//! Tag management service.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::{NewTag, Tag};
use crate::domain::repositories::TagRepository;
use crate::error::AppError;
use crate::utils::slug::slugify;
use crate::utils::validation::require_non_empty;

pub struct TagService<R: TagRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: TagRepository + ?Sized> TagService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all tags ordered by name.
    pub async fn list_tags(&self) -> Result<Vec<Tag>, AppError> {
        self.repository.list().await
    }

    /// Creates a tag with a slug derived from `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `name` is empty.
    /// Returns [`AppError::Internal`] on datastore errors.
    pub async fn create_tag(&self, name: String) -> Result<(), AppError> {
        require_non_empty("name", &name)?;

        let slug = slugify(&name);
        self.repository
            .insert(NewTag {
                name,
                slug: slug.clone(),
            })
            .await?;

        info!(%slug, "Tag created");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockTagRepository;

    #[tokio::test]
    async fn test_create_tag_slug() {
        let mut mock_repo = MockTagRepository::new();
        mock_repo
            .expect_insert()
            .withf(|t| t.name == "  Tech  Trends " && t.slug == "-tech-trends-")
            .times(1)
            .returning(|_| Ok(()));

        let service = TagService::new(Arc::new(mock_repo));

        assert!(service.create_tag("  Tech  Trends ".to_string()).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_tag_empty_name() {
        let mut mock_repo = MockTagRepository::new();
        mock_repo.expect_insert().times(0);

        let service = TagService::new(Arc::new(mock_repo));

        let result = service.create_tag(String::new()).await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
