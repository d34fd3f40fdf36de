//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: Datastore unreachable or publish queue closed
///
/// # Components Checked
///
/// 1. **Database**: Datastore ping
/// 2. **Publish Queue**: Channel open, free capacity
/// 3. **Webhook**: Whether notifications go to a real endpoint (informational)
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" },
///     "publish_queue": { "status": "ok", "message": "Capacity: 1000" },
///     "webhook": { "status": "ok", "message": "Enabled" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;

    let queue_check = check_publish_queue(&state);

    let webhook_check = check_webhook(&state);

    let all_healthy = db_check.status == "ok" && queue_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            publish_queue: queue_check,
            webhook: webhook_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match state.health.ping().await {
        Ok(()) => CheckStatus {
            status: "ok".to_string(),
            message: Some("Connected".to_string()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Database error: {}", e)),
        },
    }
}

/// Checks that the publish worker is still draining the queue.
fn check_publish_queue(state: &AppState) -> CheckStatus {
    if state.publish_sender.is_closed() {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Publish queue is closed".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Capacity: {}", state.publish_sender.capacity())),
        }
    }
}

fn check_webhook(state: &AppState) -> CheckStatus {
    let message = if state.webhook_enabled {
        "Enabled"
    } else {
        "Disabled (WEBHOOK_URL not set)"
    };

    CheckStatus {
        status: "ok".to_string(),
        message: Some(message.to_string()),
    }
}
