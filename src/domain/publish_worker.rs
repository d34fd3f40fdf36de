//! Background worker delivering publication notifications.

use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::domain::publish_event::PostPublishedEvent;
use crate::infrastructure::webhook::PublishNotifier;

/// Deliveries allowed in flight at once by [`run_publish_worker`].
pub const MAX_IN_FLIGHT: usize = 32;

/// Drains the publication queue, delivering each event once.
///
/// Each event gets exactly one delivery attempt, made by its own detached
/// task so a slow endpoint does not hold up the queue. A failed attempt is
/// logged and counted but not retried. The worker exits once every sender
/// has been dropped and the outstanding deliveries have finished.
pub async fn run_publish_worker(
    rx: mpsc::Receiver<PostPublishedEvent>,
    notifier: Arc<dyn PublishNotifier>,
) {
    run_publish_worker_with_limit(rx, notifier, MAX_IN_FLIGHT).await;
}

/// [`run_publish_worker`] with an explicit cap on concurrent deliveries.
pub async fn run_publish_worker_with_limit(
    mut rx: mpsc::Receiver<PostPublishedEvent>,
    notifier: Arc<dyn PublishNotifier>,
    max_in_flight: usize,
) {
    let permits = Arc::new(Semaphore::new(max_in_flight.max(1)));
    let mut deliveries = JoinSet::new();

    while let Some(event) = rx.recv().await {
        // Waiting here lets the queue absorb bursts while every slot is busy.
        let Ok(permit) = permits.clone().acquire_owned().await else {
            break;
        };
        let notifier = notifier.clone();
        deliveries.spawn(async move {
            deliver(notifier.as_ref(), &event).await;
            drop(permit);
        });

        while deliveries.try_join_next().is_some() {}
    }

    while deliveries.join_next().await.is_some() {}

    info!("Publish worker stopped");
}

async fn deliver(notifier: &dyn PublishNotifier, event: &PostPublishedEvent) {
    match notifier.notify(event).await {
        Ok(()) => {
            debug!(slug = %event.slug, "Publication notification delivered");
            metrics::counter!("cms_webhook_notifications_total", "outcome" => "delivered")
                .increment(1);
        }
        Err(e) => {
            warn!(slug = %event.slug, error = %e, "Publication notification failed, ignoring");
            metrics::counter!("cms_webhook_notifications_total", "outcome" => "failed")
                .increment(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::webhook::{MockPublishNotifier, NotifyError};
    use chrono::Utc;

    fn event(slug: &str) -> PostPublishedEvent {
        PostPublishedEvent {
            title: slug.to_string(),
            excerpt: String::new(),
            content: "body".to_string(),
            slug: slug.to_string(),
            published_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_worker_delivers_each_event_once() {
        let mut notifier = MockPublishNotifier::new();
        notifier
            .expect_notify()
            .withf(|e| e.slug == "first")
            .times(1)
            .returning(|_| Ok(()));
        notifier
            .expect_notify()
            .withf(|e| e.slug == "second")
            .times(1)
            .returning(|_| Ok(()));

        let (tx, rx) = mpsc::channel(8);
        tx.send(event("first")).await.unwrap();
        tx.send(event("second")).await.unwrap();
        drop(tx);

        run_publish_worker(rx, Arc::new(notifier)).await;
    }

    #[tokio::test]
    async fn test_worker_survives_failures_without_retry() {
        let mut notifier = MockPublishNotifier::new();
        notifier
            .expect_notify()
            .withf(|e| e.slug == "broken")
            .times(1)
            .returning(|_| Err(NotifyError::Status(502)));
        notifier
            .expect_notify()
            .withf(|e| e.slug == "after")
            .times(1)
            .returning(|_| Ok(()));

        let (tx, rx) = mpsc::channel(8);
        tx.send(event("broken")).await.unwrap();
        tx.send(event("after")).await.unwrap();
        drop(tx);

        run_publish_worker(rx, Arc::new(notifier)).await;
    }

    #[tokio::test]
    async fn test_worker_stops_when_queue_closed() {
        let notifier = MockPublishNotifier::new();
        let (tx, rx) = mpsc::channel::<PostPublishedEvent>(1);
        drop(tx);

        run_publish_worker(rx, Arc::new(notifier)).await;
    }

    #[tokio::test]
    async fn test_slow_endpoint_does_not_block_other_deliveries() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::time::{Duration, Instant};

        struct SlowNotifier(AtomicUsize);

        #[async_trait::async_trait]
        impl PublishNotifier for SlowNotifier {
            async fn notify(&self, _event: &PostPublishedEvent) -> Result<(), NotifyError> {
                tokio::time::sleep(Duration::from_millis(200)).await;
                self.0.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }

            fn is_enabled(&self) -> bool {
                true
            }
        }

        let notifier = Arc::new(SlowNotifier(AtomicUsize::new(0)));
        let (tx, rx) = mpsc::channel(10);
        let worker = tokio::spawn(run_publish_worker_with_limit(rx, notifier.clone(), 16));

        let started = Instant::now();
        for i in 0..15 {
            tx.send(event(&format!("post-{i}"))).await.unwrap();
        }
        drop(tx);
        worker.await.unwrap();

        assert_eq!(notifier.0.load(Ordering::SeqCst), 15);
        assert!(started.elapsed() < Duration::from_secs(2));
    }
}
