//! Tag entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for inserting a tag.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTag {
    pub name: String,
    pub slug: String,
}
