//! HTTP request tracing.
//!
//! Every request gets an `INFO` span carrying its method and path. The
//! response is logged inside that span with a level chosen by status class:
//! `ERROR` for 5xx, `WARN` for 4xx, `INFO` otherwise.
//!
//! ```text
//! INFO request{method=POST path=/api/posts status=201}: Request completed latency_ms=12
//! WARN request{method=POST path=/api/tags status=400}: Request rejected latency_ms=1
//! ```

use std::time::Duration;

use axum::http::{Request, Response};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, MakeSpan, OnResponse, TraceLayer};
use tracing::{Span, error, info, info_span, warn};

/// Opens the per-request span. Query strings are left out of `path`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        info_span!(
            "request",
            method = %request.method(),
            path = %request.uri().path(),
            status = tracing::field::Empty,
        )
    }
}

/// Records the status on the span and logs the latency.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogResponse;

impl<B> OnResponse<B> for LogResponse {
    fn on_response(self, response: &Response<B>, latency: Duration, span: &Span) {
        let status = response.status();
        span.record("status", status.as_u16());
        let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);

        if status.is_server_error() {
            error!(latency_ms, "Request failed");
        } else if status.is_client_error() {
            warn!(latency_ms, "Request rejected");
        } else {
            info!(latency_ms, "Request completed");
        }
    }
}

pub type HttpTraceLayer =
    TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan, DefaultOnRequest, LogResponse>;

/// Builds the tracing layer applied to the whole router.
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_response(LogResponse)
}
