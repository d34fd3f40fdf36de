//! Publication event handed to the notifier when a post goes live.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::domain::entities::NewPost;

/// Webhook payload describing a freshly published post.
///
/// Serialized as:
///
/// ```json
/// {
///   "title": "Hello",
///   "excerpt": "",
///   "content": "...",
///   "slug": "hello",
///   "published_at": "2025-03-01T12:00:00.000Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostPublishedEvent {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub slug: String,
    #[serde(serialize_with = "rfc3339_millis")]
    pub published_at: DateTime<Utc>,
}

impl PostPublishedEvent {
    /// Builds the event from the post that was just inserted.
    pub fn from_post(post: &NewPost, published_at: DateTime<Utc>) -> Self {
        Self {
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            slug: post.slug.clone(),
            published_at,
        }
    }
}

fn rfc3339_millis<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}
