#![allow(dead_code)]

use axum::Router;
use content_cms::api::routes::api_routes;
use content_cms::domain::publish_event::PostPublishedEvent;
use content_cms::infrastructure::persistence::Repositories;
use content_cms::state::AppState;
use tokio::sync::mpsc;

pub const TEST_SECRET: &str = "test-signing-secret";

/// State over a fresh in-memory datastore, plus the publish queue's receiver
/// so tests can observe enqueued events.
pub fn create_test_state() -> (AppState, mpsc::Receiver<PostPublishedEvent>) {
    create_test_state_with(Repositories::memory())
}

pub fn create_test_state_with(
    repositories: Repositories,
) -> (AppState, mpsc::Receiver<PostPublishedEvent>) {
    let (tx, rx) = mpsc::channel(100);
    let state = AppState::new(repositories, tx, TEST_SECRET.to_string(), false);
    (state, rx)
}

/// The `/api` routes without rate limiting, which needs peer addresses.
pub fn api_app(state: AppState) -> Router {
    Router::new().nest("/api", api_routes()).with_state(state)
}

/// Opens a session and returns its raw bearer token.
pub async fn open_session(state: &AppState, email: &str) -> String {
    state
        .session_service
        .open_session(email.to_string(), None)
        .await
        .unwrap()
        .token
}
