//! PostgreSQL implementation of the tag repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewTag, Tag};
use crate::domain::repositories::TagRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct TagRow {
    id: Uuid,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
}

/// PostgreSQL repository for tags.
pub struct PgTagRepository {
    pool: Arc<PgPool>,
}

impl PgTagRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    async fn insert(&self, new_tag: NewTag) -> Result<(), AppError> {
        sqlx::query("INSERT INTO tags (name, slug) VALUES ($1, $2)")
            .bind(new_tag.name)
            .bind(new_tag.slug)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Tag>, AppError> {
        let rows = sqlx::query_as::<_, TagRow>(
            r#"
            SELECT id, name, slug, created_at
            FROM tags
            ORDER BY name, created_at
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Tag {
                id: r.id,
                name: r.name,
                slug: r.slug,
                created_at: r.created_at,
            })
            .collect())
    }
}
