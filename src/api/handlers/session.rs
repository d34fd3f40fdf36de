//! Handlers for the current session.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;

use crate::api::dto::session::SessionResponse;
use crate::api::middleware::session::SessionToken;
use crate::application::services::SessionProvider;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the identity behind the request's bearer token.
///
/// # Endpoint
///
/// `GET /api/session`
///
/// Anonymous requests, and tokens that match no active session, get
/// `{ "user": null }`.
pub async fn current_session_handler(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<SessionResponse>, AppError> {
    let identity = state
        .session_service
        .for_request(token)
        .current_identity()
        .await?;

    Ok(Json(SessionResponse {
        user: identity.map(Into::into),
    }))
}

/// Revokes the session behind the request's bearer token.
///
/// # Endpoint
///
/// `POST /api/session/sign-out`
///
/// # Errors
///
/// Returns 401 if no token is sent or it matches no active session.
pub async fn sign_out_handler(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Result<StatusCode, AppError> {
    let token = token.ok_or_else(|| {
        AppError::unauthorized(
            "Unauthorized",
            json!({"reason": "Authorization header is missing or invalid"}),
        )
    })?;

    state.session_service.sign_out(&token).await?;

    Ok(StatusCode::NO_CONTENT)
}
