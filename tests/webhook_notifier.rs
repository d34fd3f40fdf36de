use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use chrono::{TimeZone, Utc};
use content_cms::domain::publish_event::PostPublishedEvent;
use content_cms::infrastructure::webhook::{
    HttpWebhookNotifier, NotifyError, NullNotifier, PublishNotifier,
};
use serde_json::{Value, json};
use url::Url;

type Received = Arc<Mutex<Vec<Value>>>;

async fn capture(State(received): State<Received>, Json(body): Json<Value>) -> StatusCode {
    received.lock().unwrap().push(body);
    StatusCode::NO_CONTENT
}

/// Serves `router` on an ephemeral local port and returns its base URL.
async fn spawn_receiver(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{addr}/publish")).unwrap()
}

fn event() -> PostPublishedEvent {
    PostPublishedEvent {
        title: "Breaking News!!".to_string(),
        excerpt: "Short".to_string(),
        content: "Something happened".to_string(),
        slug: "breaking-news!!".to_string(),
        published_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
    }
}

#[tokio::test]
async fn test_delivers_json_body() {
    let received: Received = Arc::default();
    let router = Router::new()
        .route("/publish", post(capture))
        .with_state(received.clone());
    let url = spawn_receiver(router).await;

    let notifier = HttpWebhookNotifier::new(url, Duration::from_secs(5)).unwrap();
    notifier.notify(&event()).await.unwrap();

    let bodies = received.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        json!({
            "title": "Breaking News!!",
            "excerpt": "Short",
            "content": "Something happened",
            "slug": "breaking-news!!",
            "published_at": "2025-03-01T12:00:00.000Z"
        })
    );
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let router = Router::new().route("/publish", post(|| async { StatusCode::BAD_GATEWAY }));
    let url = spawn_receiver(router).await;

    let notifier = HttpWebhookNotifier::new(url, Duration::from_secs(5)).unwrap();
    let result = notifier.notify(&event()).await;

    assert!(matches!(result, Err(NotifyError::Status(502))));
}

#[tokio::test]
async fn test_slow_endpoint_times_out() {
    let router = Router::new().route(
        "/publish",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            StatusCode::NO_CONTENT
        }),
    );
    let url = spawn_receiver(router).await;

    let notifier = HttpWebhookNotifier::new(url, Duration::from_millis(100)).unwrap();
    let result = notifier.notify(&event()).await;

    assert!(matches!(result, Err(NotifyError::Timeout)), "got {result:?}");
}

#[tokio::test]
async fn test_unreachable_endpoint_is_error() {
    // Bind then drop to get a port that nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = Url::parse(&format!("http://{addr}/publish")).unwrap();
    let notifier = HttpWebhookNotifier::new(url, Duration::from_secs(2)).unwrap();

    assert!(notifier.notify(&event()).await.is_err());
}

#[tokio::test]
async fn test_null_notifier_accepts_everything() {
    let notifier = NullNotifier::new();

    assert!(!notifier.is_enabled());
    assert!(notifier.notify(&event()).await.is_ok());
}
