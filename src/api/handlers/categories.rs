//! Handlers for category endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::category::{CategoryListResponse, CreateCategoryRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all categories ordered by name.
///
/// # Endpoint
///
/// `GET /api/categories`
pub async fn list_categories_handler(
    State(state): State<AppState>,
) -> Result<Json<CategoryListResponse>, AppError> {
    let categories = state.category_service.list_categories().await?;

    Ok(Json(CategoryListResponse {
        items: categories.into_iter().map(Into::into).collect(),
    }))
}

/// Creates a category.
///
/// # Endpoint
///
/// `POST /api/categories`
///
/// # Request Body
///
/// ```json
/// { "name": "Rust Tips", "description": "optional", "color": "#3B82F6" }
/// ```
///
/// Responds `201 Created` with an empty body.
///
/// # Errors
///
/// Returns 400 if `name` is empty or `color` is not a hex color.
pub async fn create_category_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    state
        .category_service
        .create_category(payload.name, payload.description, payload.color)
        .await?;

    Ok(StatusCode::CREATED)
}
