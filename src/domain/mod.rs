//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`publish_event`] - Webhook payload for published posts
//! - [`publish_worker`] - Background delivery of publication events
//!
//! # Publication Flow
//!
//! 1. [`crate::application::services::PostService`] inserts a published post
//! 2. A [`publish_event::PostPublishedEvent`] is pushed onto a bounded channel
//!    without waiting
//! 3. [`publish_worker::run_publish_worker`] makes one delivery attempt via
//!    [`crate::infrastructure::webhook::PublishNotifier`]
//! 4. The outcome is logged and counted; nothing else observes it

pub mod entities;
pub mod publish_event;
pub mod publish_worker;
pub mod repositories;
