//! Publication notifier trait and error types.

use async_trait::async_trait;

use crate::domain::publish_event::PostPublishedEvent;

/// Errors that can occur while delivering a notification.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("webhook client setup failed: {0}")]
    Client(String),
    #[error("webhook request timed out")]
    Timeout,
    #[error("webhook transport error: {0}")]
    Transport(String),
    #[error("webhook responded with status {0}")]
    Status(u16),
}

/// Result type for notifier operations.
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Best-effort sink for publication events.
///
/// Callers treat every error as non-fatal: it is logged and dropped by
/// [`crate::domain::publish_worker::run_publish_worker`].
///
/// # Implementations
///
/// - [`crate::infrastructure::webhook::HttpWebhookNotifier`] - JSON POST to a configured URL
/// - [`crate::infrastructure::webhook::NullNotifier`] - Discards events when no URL is configured
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PublishNotifier: Send + Sync {
    /// Makes a single delivery attempt for the event.
    async fn notify(&self, event: &PostPublishedEvent) -> NotifyResult<()>;

    /// Whether events actually leave the process.
    fn is_enabled(&self) -> bool;
}
