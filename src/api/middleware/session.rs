//! Optional bearer-token extraction for session-aware endpoints.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_auth::AuthBearer;

/// The raw bearer token of a request, if it sent a well-formed one.
///
/// Never rejects: a missing or malformed `Authorization` header yields
/// `SessionToken(None)` and the request proceeds anonymously. Handlers that
/// require a session decide how to respond to `None`.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(pub Option<String>);

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = AuthBearer::from_request_parts(parts, &())
            .await
            .ok()
            .map(|AuthBearer(token)| token);

        Ok(SessionToken(token))
    }
}
