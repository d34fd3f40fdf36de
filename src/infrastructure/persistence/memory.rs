//! In-memory datastore - used with `DATA_BACKEND=memory` and in tests.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{
    Category, NewCategory, NewPost, NewSession, NewTag, Post, Session, Tag,
};
use crate::domain::repositories::{
    CategoryRepository, HealthRepository, PostRepository, SessionRepository, TagRepository,
};
use crate::error::AppError;

struct StoredSession {
    session: Session,
    token_hash: String,
}

/// A datastore holding every table in process memory.
///
/// Mirrors the PostgreSQL schema's behavior: ids and timestamps are generated
/// on insert, listings follow the same ordering, `posts.category_id` must
/// reference an existing category, and session token hashes are unique.
/// Data is lost on process restart.
pub struct MemoryDatastore {
    categories: RwLock<Vec<Category>>,
    tags: RwLock<Vec<Tag>>,
    posts: RwLock<Vec<Post>>,
    sessions: RwLock<Vec<StoredSession>>,
}

impl MemoryDatastore {
    pub fn new() -> Self {
        Self {
            categories: RwLock::new(Vec::new()),
            tags: RwLock::new(Vec::new()),
            posts: RwLock::new(Vec::new()),
            sessions: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryDatastore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryRepository for MemoryDatastore {
    async fn insert(&self, new_category: NewCategory) -> Result<(), AppError> {
        let mut categories = self.categories.write().await;
        categories.push(Category {
            id: Uuid::new_v4(),
            name: new_category.name,
            description: new_category.description,
            color: new_category.color,
            slug: new_category.slug,
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Category>, AppError> {
        let mut categories = self.categories.read().await.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }
}

#[async_trait]
impl TagRepository for MemoryDatastore {
    async fn insert(&self, new_tag: NewTag) -> Result<(), AppError> {
        let mut tags = self.tags.write().await;
        tags.push(Tag {
            id: Uuid::new_v4(),
            name: new_tag.name,
            slug: new_tag.slug,
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Tag>, AppError> {
        let mut tags = self.tags.read().await.clone();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }
}

#[async_trait]
impl PostRepository for MemoryDatastore {
    async fn insert(&self, new_post: NewPost) -> Result<(), AppError> {
        if let Some(category_id) = new_post.category_id {
            let categories = self.categories.read().await;
            if !categories.iter().any(|c| c.id == category_id) {
                return Err(AppError::bad_request(
                    "Referenced record does not exist",
                    json!({ "constraint": "posts_category_id_fkey" }),
                ));
            }
        }

        let mut posts = self.posts.write().await;
        posts.push(Post {
            id: Uuid::new_v4(),
            title: new_post.title,
            content: new_post.content,
            excerpt: new_post.excerpt,
            category_id: new_post.category_id,
            status: new_post.status,
            slug: new_post.slug,
            author_id: new_post.author_id,
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Post>, AppError> {
        // Reverse insertion order first so equal timestamps still list newest first.
        let mut posts: Vec<Post> = self.posts.read().await.iter().rev().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}

#[async_trait]
impl SessionRepository for MemoryDatastore {
    async fn create(&self, new_session: NewSession) -> Result<Session, AppError> {
        let mut sessions = self.sessions.write().await;

        if sessions
            .iter()
            .any(|s| s.token_hash == new_session.token_hash)
        {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "sessions_token_hash_key" }),
            ));
        }

        let session = Session {
            id: Uuid::new_v4(),
            user_id: new_session.user_id,
            email: new_session.email,
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        };

        sessions.push(StoredSession {
            session: session.clone(),
            token_hash: new_session.token_hash,
        });

        Ok(session)
    }

    async fn find_active(&self, token_hash: &str) -> Result<Option<Session>, AppError> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .iter()
            .find(|s| s.token_hash == token_hash && !s.session.is_revoked())
            .map(|s| s.session.clone()))
    }

    async fn touch(&self, token_hash: &str) -> Result<(), AppError> {
        let mut sessions = self.sessions.write().await;
        if let Some(stored) = sessions
            .iter_mut()
            .find(|s| s.token_hash == token_hash && !s.session.is_revoked())
        {
            stored.session.last_used_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn revoke(&self, token_hash: &str) -> Result<bool, AppError> {
        let mut sessions = self.sessions.write().await;
        match sessions
            .iter_mut()
            .find(|s| s.token_hash == token_hash && !s.session.is_revoked())
        {
            Some(stored) => {
                stored.session.revoked_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn revoke_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        let mut sessions = self.sessions.write().await;
        match sessions
            .iter_mut()
            .find(|s| s.session.id == id && !s.session.is_revoked())
        {
            Some(stored) => {
                stored.session.revoked_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(&self) -> Result<Vec<Session>, AppError> {
        let sessions = self.sessions.read().await;
        let mut list: Vec<Session> = sessions.iter().rev().map(|s| s.session.clone()).collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }
}

#[async_trait]
impl HealthRepository for MemoryDatastore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
