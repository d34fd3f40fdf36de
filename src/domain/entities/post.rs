//! Post entity, its publication status, and the enriched list view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::Category;

/// Display name used for posts whose category is absent or unresolved.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Publication state of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown post status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for PostStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            "archived" => Ok(PostStatus::Archived),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A blog post as stored in the datastore.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category_id: Option<Uuid>,
    pub status: PostStatus,
    pub slug: String,
    pub author_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Fields a client submits when creating a post.
///
/// Slug and author are not part of the submission; the service derives them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostSubmission {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category_id: Option<Uuid>,
    pub status: PostStatus,
}

/// Input data for inserting a post.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category_id: Option<Uuid>,
    pub status: PostStatus,
    pub slug: String,
    pub author_id: Option<Uuid>,
}

/// Category information attached to a listed post.
#[derive(Debug, Clone, PartialEq)]
pub enum PostCategory {
    Assigned {
        id: Uuid,
        name: String,
        color: String,
    },
    Uncategorized,
}

impl PostCategory {
    pub fn name(&self) -> &str {
        match self {
            PostCategory::Assigned { name, .. } => name,
            PostCategory::Uncategorized => UNCATEGORIZED,
        }
    }

    pub fn color(&self) -> Option<&str> {
        match self {
            PostCategory::Assigned { color, .. } => Some(color),
            PostCategory::Uncategorized => None,
        }
    }
}

impl From<&Category> for PostCategory {
    fn from(category: &Category) -> Self {
        PostCategory::Assigned {
            id: category.id,
            name: category.name.clone(),
            color: category.color.clone(),
        }
    }
}

/// A post paired with its resolved category, as returned by the list operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PostListItem {
    pub post: Post,
    pub category: PostCategory,
}
