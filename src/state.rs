//! Shared application state injected into every handler.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::{CategoryService, PostService, SessionService, TagService};
use crate::domain::publish_event::PostPublishedEvent;
use crate::domain::repositories::{
    CategoryRepository, HealthRepository, PostRepository, SessionRepository, TagRepository,
};
use crate::infrastructure::persistence::Repositories;

/// Services and handles shared across requests.
///
/// Cloning is cheap: every field is an `Arc` or a channel sender.
#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService<dyn CategoryRepository>>,
    pub tag_service: Arc<TagService<dyn TagRepository>>,
    pub post_service: Arc<PostService<dyn PostRepository, dyn CategoryRepository>>,
    pub session_service: Arc<SessionService<dyn SessionRepository>>,
    pub health: Arc<dyn HealthRepository>,
    pub publish_sender: mpsc::Sender<PostPublishedEvent>,
    /// Whether publication events are delivered to a real webhook.
    pub webhook_enabled: bool,
}

impl AppState {
    /// Wires the services on top of one set of repositories.
    ///
    /// `publish_sender` is the sending half of the publish worker's queue.
    pub fn new(
        repositories: Repositories,
        publish_sender: mpsc::Sender<PostPublishedEvent>,
        signing_secret: String,
        webhook_enabled: bool,
    ) -> Self {
        let Repositories {
            categories,
            tags,
            posts,
            sessions,
            health,
        } = repositories;

        Self {
            category_service: Arc::new(CategoryService::new(categories.clone())),
            tag_service: Arc::new(TagService::new(tags)),
            post_service: Arc::new(PostService::new(
                posts,
                categories,
                publish_sender.clone(),
            )),
            session_service: Arc::new(SessionService::new(sessions, signing_secret)),
            health,
            publish_sender,
            webhook_enabled,
        }
    }
}
