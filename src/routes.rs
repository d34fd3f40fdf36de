//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check: datastore, publish queue, webhook mode
//! - `/api/*`            - REST API for categories, tags, posts and the session
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api/*`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Per-IP limits applied to `/api/*`.
#[derive(Debug, Clone, Copy)]
pub struct RateLimit {
    pub period_secs: u64,
    pub burst: u32,
}

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Returns an error if the rate limit values are rejected.
pub fn app_router(state: AppState, limit: RateLimit) -> Result<NormalizePath<Router>> {
    let api_router = api::routes::api_routes()
        .layer(rate_limit::layer(limit.period_secs, limit.burst)?);

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
