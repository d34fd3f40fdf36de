//! Datastore implementations of the domain repository traits.
//!
//! # Repositories
//!
//! - [`PgCategoryRepository`] - Category storage
//! - [`PgTagRepository`] - Tag storage
//! - [`PgPostRepository`] - Post storage
//! - [`PgSessionRepository`] - Session token storage
//! - [`PgHealthRepository`] - Liveness probe
//! - [`MemoryDatastore`] - Every trait above, held in process memory
//!
//! [`Repositories`] bundles one implementation of each trait behind trait
//! objects so the rest of the application is backend-agnostic.

pub mod memory;
pub mod pg_category_repository;
pub mod pg_health_repository;
pub mod pg_post_repository;
pub mod pg_session_repository;
pub mod pg_tag_repository;

pub use memory::MemoryDatastore;
pub use pg_category_repository::PgCategoryRepository;
pub use pg_health_repository::PgHealthRepository;
pub use pg_post_repository::PgPostRepository;
pub use pg_session_repository::PgSessionRepository;
pub use pg_tag_repository::PgTagRepository;

use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::{
    CategoryRepository, HealthRepository, PostRepository, SessionRepository, TagRepository,
};

/// One repository per entity type, selected by backend.
#[derive(Clone)]
pub struct Repositories {
    pub categories: Arc<dyn CategoryRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub health: Arc<dyn HealthRepository>,
}

impl Repositories {
    /// PostgreSQL-backed repositories sharing one connection pool.
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        Self {
            categories: Arc::new(PgCategoryRepository::new(pool.clone())),
            tags: Arc::new(PgTagRepository::new(pool.clone())),
            posts: Arc::new(PgPostRepository::new(pool.clone())),
            sessions: Arc::new(PgSessionRepository::new(pool.clone())),
            health: Arc::new(PgHealthRepository::new(pool)),
        }
    }

    /// Repositories backed by a fresh [`MemoryDatastore`].
    pub fn memory() -> Self {
        Self::from_memory(Arc::new(MemoryDatastore::new()))
    }

    /// Repositories backed by an existing [`MemoryDatastore`].
    pub fn from_memory(store: Arc<MemoryDatastore>) -> Self {
        Self {
            categories: store.clone(),
            tags: store.clone(),
            posts: store.clone(),
            sessions: store.clone(),
            health: store,
        }
    }
}
