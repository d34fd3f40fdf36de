//! API route configuration.
//!
//! Every route accepts anonymous requests. Endpoints that care about the
//! caller read an optional bearer token through
//! [`crate::api::middleware::session::SessionToken`].

use crate::api::handlers::{
    create_category_handler, create_post_handler, create_tag_handler, current_session_handler,
    list_categories_handler, list_posts_handler, list_tags_handler, sign_out_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All routes nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /categories`        - List categories by name
/// - `POST /categories`        - Create a category
/// - `GET  /tags`              - List tags by name
/// - `POST /tags`              - Create a tag
/// - `GET  /posts`             - List posts newest first, with category
/// - `POST /posts`             - Create a post (optional Bearer token for attribution)
/// - `GET  /session`           - Identity behind the Bearer token, or `null`
/// - `POST /session/sign-out`  - Revoke the Bearer token's session
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(list_categories_handler).post(create_category_handler),
        )
        .route("/tags", get(list_tags_handler).post(create_tag_handler))
        .route("/posts", get(list_posts_handler).post(create_post_handler))
        .route("/session", get(current_session_handler))
        .route("/session/sign-out", post(sign_out_handler))
}
