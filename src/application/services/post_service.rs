//! Post listing, creation and publication.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::services::SessionProvider;
use crate::domain::entities::{
    Category, NewPost, Post, PostCategory, PostListItem, PostStatus, PostSubmission,
};
use crate::domain::publish_event::PostPublishedEvent;
use crate::domain::repositories::{CategoryRepository, PostRepository};
use crate::error::AppError;
use crate::utils::slug::slugify;
use crate::utils::validation::require_non_empty;

/// Service for listing and creating posts.
///
/// Creating a post in the `published` state hands a [`PostPublishedEvent`] to
/// the publish worker through a bounded channel. The hand-off never blocks
/// the request: when the queue is full, a detached task waits for room.
/// Only a stopped worker loses the event.
pub struct PostService<P, C>
where
    P: PostRepository + ?Sized,
    C: CategoryRepository + ?Sized,
{
    posts: Arc<P>,
    categories: Arc<C>,
    publish_tx: mpsc::Sender<PostPublishedEvent>,
}

impl<P, C> PostService<P, C>
where
    P: PostRepository + ?Sized,
    C: CategoryRepository + ?Sized,
{
    pub fn new(
        posts: Arc<P>,
        categories: Arc<C>,
        publish_tx: mpsc::Sender<PostPublishedEvent>,
    ) -> Self {
        Self {
            posts,
            categories,
            publish_tx,
        }
    }

    /// Lists all posts newest first, each paired with its category.
    ///
    /// Posts and categories are fetched concurrently, then joined in memory.
    /// A post whose `category_id` is absent or matches no category lists as
    /// [`PostCategory::Uncategorized`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if either fetch fails. No partial list is
    /// returned.
    pub async fn list_posts(&self) -> Result<Vec<PostListItem>, AppError> {
        let (posts, categories) = tokio::try_join!(self.posts.list(), self.categories.list())?;
        Ok(enrich(posts, &categories))
    }

    /// Creates a post attributed to the current session's identity.
    ///
    /// The slug is derived from the title. A session lookup failure degrades
    /// to an anonymous post. When the submitted status is
    /// [`PostStatus::Published`] and the insert succeeded, exactly one
    /// publication event is enqueued.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title or content is empty, or if
    /// `category_id` references no category.
    /// Returns [`AppError::Internal`] on datastore errors. No event is enqueued
    /// on any error.
    pub async fn create_post<S>(&self, submission: PostSubmission, session: &S) -> Result<(), AppError>
    where
        S: SessionProvider + ?Sized,
    {
        require_non_empty("title", &submission.title)?;
        require_non_empty("content", &submission.content)?;

        let author_id = self.resolve_author(session).await;

        let new_post = NewPost {
            slug: slugify(&submission.title),
            title: submission.title,
            content: submission.content,
            excerpt: submission.excerpt,
            category_id: submission.category_id,
            status: submission.status,
            author_id,
        };

        self.posts.insert(new_post.clone()).await?;

        info!(slug = %new_post.slug, status = %new_post.status, "Post created");

        if new_post.status == PostStatus::Published {
            self.enqueue_publication(PostPublishedEvent::from_post(&new_post, Utc::now()));
        }

        Ok(())
    }

    async fn resolve_author<S>(&self, session: &S) -> Option<Uuid>
    where
        S: SessionProvider + ?Sized,
    {
        match session.current_identity().await {
            Ok(identity) => identity.map(|i| i.id),
            Err(e) => {
                warn!(error = %e, "Session lookup failed, creating post anonymously");
                None
            }
        }
    }

    fn enqueue_publication(&self, event: PostPublishedEvent) {
        match self.publish_tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                debug!(slug = %event.slug, "Publish queue full, handing off in background");
                let tx = self.publish_tx.clone();
                tokio::spawn(async move {
                    if let Err(mpsc::error::SendError(event)) = tx.send(event).await {
                        warn!(slug = %event.slug, "Publish worker stopped, dropping notification");
                    }
                });
            }
            Err(TrySendError::Closed(event)) => {
                warn!(slug = %event.slug, "Publish worker stopped, dropping notification");
            }
        }
    }
}

/// Pairs each post with its category by id lookup, keeping post order.
fn enrich(posts: Vec<Post>, categories: &[Category]) -> Vec<PostListItem> {
    let by_id: HashMap<Uuid, &Category> = categories.iter().map(|c| (c.id, c)).collect();

    posts
        .into_iter()
        .map(|post| {
            let category = post
                .category_id
                .and_then(|id| by_id.get(&id))
                .map(|c| PostCategory::from(*c))
                .unwrap_or(PostCategory::Uncategorized);
            PostListItem { post, category }
        })
        .collect()
}
