//! Handlers for post endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::post::{CreatePostRequest, PostListResponse};
use crate::api::middleware::session::SessionToken;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all posts newest first, each with its category name and color.
///
/// # Endpoint
///
/// `GET /api/posts`
///
/// # Response
///
/// ```json
/// {
///   "items": [
///     {
///       "id": "…",
///       "title": "Hello World",
///       "slug": "hello-world",
///       "status": "published",
///       "category_id": null,
///       "category": { "id": null, "name": "Uncategorized", "color": null },
///       "...": "..."
///     }
///   ]
/// }
/// ```
pub async fn list_posts_handler(
    State(state): State<AppState>,
) -> Result<Json<PostListResponse>, AppError> {
    let posts = state.post_service.list_posts().await?;

    Ok(Json(PostListResponse {
        items: posts.into_iter().map(Into::into).collect(),
    }))
}

/// Creates a post, attributed to the bearer token's session if one is sent.
///
/// # Endpoint
///
/// `POST /api/posts`
///
/// Responds `201 Created` with an empty body. Posts created with
/// `"status": "published"` trigger a webhook notification in the background;
/// its outcome never affects this response.
///
/// # Errors
///
/// Returns 400 if `title` or `content` is empty, or `category_id` references
/// no category.
pub async fn create_post_handler(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Json(payload): Json<CreatePostRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    let session = state.session_service.for_request(token);
    state
        .post_service
        .create_post(payload.into(), &session)
        .await?;

    Ok(StatusCode::CREATED)
}
