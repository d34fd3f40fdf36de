//! HTTP webhook notifier.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use super::service::{NotifyError, NotifyResult, PublishNotifier};
use crate::domain::publish_event::PostPublishedEvent;

/// Posts publication events as JSON to a fixed endpoint.
///
/// Sends no authentication header and ignores the response body. Any non-2xx
/// status counts as a failed delivery.
pub struct HttpWebhookNotifier {
    client: Client,
    url: Url,
}

impl HttpWebhookNotifier {
    /// Creates a notifier whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Client`] if the HTTP client cannot be built.
    pub fn new(url: Url, timeout: Duration) -> NotifyResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifyError::Client(e.to_string()))?;

        info!("Webhook notifier enabled for {}", url);

        Ok(Self { client, url })
    }
}

#[async_trait]
impl PublishNotifier for HttpWebhookNotifier {
    async fn notify(&self, event: &PostPublishedEvent) -> NotifyResult<()> {
        let response = self
            .client
            .post(self.url.clone())
            .json(event)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NotifyError::Timeout
                } else {
                    NotifyError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status.as_u16()));
        }

        debug!(slug = %event.slug, status = status.as_u16(), "Webhook accepted event");
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        true
    }
}
