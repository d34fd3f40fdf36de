//! Handlers for tag endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::tag::{CreateTagRequest, TagListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/tags`
pub async fn list_tags_handler(
    State(state): State<AppState>,
) -> Result<Json<TagListResponse>, AppError> {
    let tags = state.tag_service.list_tags().await?;

    Ok(Json(TagListResponse {
        items: tags.into_iter().map(Into::into).collect(),
    }))
}

/// `POST /api/tags`, responds `201 Created` with an empty body.
pub async fn create_tag_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateTagRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    state.tag_service.create_tag(payload.name).await?;

    Ok(StatusCode::CREATED)
}
