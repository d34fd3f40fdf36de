//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access. Implementations live in
//! `crate::infrastructure::persistence`: one PostgreSQL repository per trait,
//! plus an in-memory datastore implementing all of them.
//!
//! # Available Repositories
//!
//! - [`CategoryRepository`] - Category insert and ordered listing
//! - [`TagRepository`] - Tag insert and ordered listing
//! - [`PostRepository`] - Post insert and newest-first listing
//! - [`SessionRepository`] - Session token storage and revocation
//! - [`HealthRepository`] - Datastore liveness probe
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod category_repository;
pub mod health_repository;
pub mod post_repository;
pub mod session_repository;
pub mod tag_repository;

pub use category_repository::CategoryRepository;
pub use health_repository::HealthRepository;
pub use post_repository::PostRepository;
pub use session_repository::SessionRepository;
pub use tag_repository::TagRepository;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use health_repository::MockHealthRepository;
#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
#[cfg(test)]
pub use tag_repository::MockTagRepository;
