//! PostgreSQL implementation of the post repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewPost, Post, PostStatus};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    content: String,
    excerpt: String,
    category_id: Option<Uuid>,
    status: String,
    slug: String,
    author_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = AppError;

    fn try_from(r: PostRow) -> Result<Self, Self::Error> {
        let status = r.status.parse::<PostStatus>().map_err(|e| {
            AppError::internal(
                "Stored post has an unknown status",
                json!({ "id": r.id, "reason": e.to_string() }),
            )
        })?;

        Ok(Post {
            id: r.id,
            title: r.title,
            content: r.content,
            excerpt: r.excerpt,
            category_id: r.category_id,
            status,
            slug: r.slug,
            author_id: r.author_id,
            created_at: r.created_at,
        })
    }
}

/// PostgreSQL repository for posts.
///
/// The `posts.category_id` foreign key is enforced by the database; a
/// violation surfaces as [`AppError::Validation`].
pub struct PgPostRepository {
    pool: Arc<PgPool>,
}

impl PgPostRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO posts (title, content, excerpt, category_id, status, slug, author_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(new_post.title)
        .bind(new_post.content)
        .bind(new_post.excerpt)
        .bind(new_post.category_id)
        .bind(new_post.status.as_str())
        .bind(new_post.slug)
        .bind(new_post.author_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Post>, AppError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, excerpt, category_id, status, slug, author_id, created_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(Post::try_from).collect()
    }
}
