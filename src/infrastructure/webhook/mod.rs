//! Outbound notifications for published posts.
//!
//! Provides a [`PublishNotifier`] trait with two implementations:
//! - [`HttpWebhookNotifier`] - JSON POST to the configured `WEBHOOK_URL`
//! - [`NullNotifier`] - No-op when no webhook is configured

mod http_notifier;
mod null_notifier;
mod service;

pub use http_notifier::HttpWebhookNotifier;
pub use null_notifier::NullNotifier;
pub use service::{NotifyError, NotifyResult, PublishNotifier};

#[cfg(test)]
pub use service::MockPublishNotifier;
