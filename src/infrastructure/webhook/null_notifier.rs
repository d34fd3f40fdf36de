//! No-op notifier used when no webhook URL is configured.

use async_trait::async_trait;
use tracing::debug;

use super::service::{NotifyResult, PublishNotifier};
use crate::domain::publish_event::PostPublishedEvent;

/// A notifier that accepts every event and sends nothing.
pub struct NullNotifier;

impl NullNotifier {
    pub fn new() -> Self {
        debug!("Using NullNotifier (webhook disabled)");
        Self
    }
}

impl Default for NullNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PublishNotifier for NullNotifier {
    async fn notify(&self, event: &PostPublishedEvent) -> NotifyResult<()> {
        debug!(slug = %event.slug, "Webhook disabled, dropping publication event");
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
