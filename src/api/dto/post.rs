//! DTOs for post endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{PostCategory, PostListItem, PostStatus, PostSubmission};

/// Request body for `POST /api/posts`.
///
/// `category_id` may be omitted, `null`, or an empty string to leave the post
/// uncategorized. `excerpt` defaults to empty and `status` to `draft`.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    #[serde(default)]
    pub excerpt: String,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub category_id: Option<Uuid>,

    #[serde(default)]
    pub status: PostStatus,
}

impl From<CreatePostRequest> for PostSubmission {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            excerpt: req.excerpt,
            category_id: req.category_id,
            status: req.status,
        }
    }
}

/// Category summary attached to a listed post.
///
/// Uncategorized posts carry `name: "Uncategorized"` with `id` and `color`
/// set to `null`.
#[derive(Debug, Serialize)]
pub struct PostCategoryItem {
    pub id: Option<Uuid>,
    pub name: String,
    pub color: Option<String>,
}

impl From<PostCategory> for PostCategoryItem {
    fn from(category: PostCategory) -> Self {
        let name = category.name().to_string();
        match category {
            PostCategory::Assigned { id, color, .. } => Self {
                id: Some(id),
                name,
                color: Some(color),
            },
            PostCategory::Uncategorized => Self {
                id: None,
                name,
                color: None,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostItem {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category_id: Option<Uuid>,
    pub status: PostStatus,
    pub slug: String,
    pub author_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub category: PostCategoryItem,
}

impl From<PostListItem> for PostItem {
    fn from(item: PostListItem) -> Self {
        let PostListItem { post, category } = item;
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            excerpt: post.excerpt,
            category_id: post.category_id,
            status: post.status,
            slug: post.slug,
            author_id: post.author_id,
            created_at: post.created_at,
            category: category.into(),
        }
    }
}

/// Response for `GET /api/posts`, newest first.
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub items: Vec<PostItem>,
}
