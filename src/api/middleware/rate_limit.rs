//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a per-IP rate limiter for the `/api` routes.
///
/// # Limits
///
/// - **Period**: one request of quota replenished every `period_secs` seconds
///   (`RATE_LIMIT_PERIOD_SECS`, default 2)
/// - **Burst**: `burst` requests (`RATE_LIMIT_BURST`, default 100)
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if either value is zero.
pub fn layer(
    period_secs: u64,
    burst: u32,
) -> Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(period_secs)
        .burst_size(burst)
        .finish()
        .context("RATE_LIMIT_PERIOD_SECS and RATE_LIMIT_BURST must be greater than zero")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
