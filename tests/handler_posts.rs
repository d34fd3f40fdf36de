mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum_test::TestServer;
use content_cms::domain::publish_worker::run_publish_worker;
use content_cms::infrastructure::persistence::Repositories;
use content_cms::infrastructure::webhook::HttpWebhookNotifier;
use content_cms::state::AppState;
use serde_json::{Value, json};
use tokio::sync::mpsc;
use url::Url;
use uuid::Uuid;

async fn create_category(server: &TestServer, name: &str, color: &str) -> String {
    server
        .post("/api/categories")
        .json(&json!({"name": name, "color": color}))
        .await
        .assert_status(StatusCode::CREATED);

    let list = server.get("/api/categories").await.json::<Value>();
    list["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == name)
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_published_post_enqueues_exactly_one_event() {
    let (state, mut rx) = common::create_test_state();
    let server = TestServer::new(common::api_app(state)).unwrap();

    let response = server
        .post("/api/posts")
        .json(&json!({
            "title": "Breaking News!!",
            "content": "Something happened",
            "excerpt": "Short",
            "status": "published"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert!(response.as_bytes().is_empty());

    let event = rx.try_recv().unwrap();
    assert_eq!(event.slug, "breaking-news!!");
    assert_eq!(event.title, "Breaking News!!");
    assert_eq!(event.excerpt, "Short");
    assert_eq!(event.content, "Something happened");
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_draft_and_archived_posts_enqueue_nothing() {
    let (state, mut rx) = common::create_test_state();
    let server = TestServer::new(common::api_app(state)).unwrap();

    for status in ["draft", "archived"] {
        server
            .post("/api/posts")
            .json(&json!({"title": "Quiet", "content": "Body", "status": status}))
            .await
            .assert_status(StatusCode::CREATED);
    }
    server
        .post("/api/posts")
        .json(&json!({"title": "Default Status", "content": "Body"}))
        .await
        .assert_status(StatusCode::CREATED);

    assert!(rx.try_recv().is_err());

    let list = server.get("/api/posts").await.json::<Value>();
    assert_eq!(list["items"].as_array().unwrap().len(), 3);
    assert_eq!(list["items"][0]["status"], "draft");
}

#[tokio::test]
async fn test_post_without_category_lists_as_uncategorized() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(common::api_app(state)).unwrap();

    server
        .post("/api/posts")
        .json(&json!({"title": "Loose Post", "content": "Body", "category_id": ""}))
        .await
        .assert_status(StatusCode::CREATED);

    let list = server.get("/api/posts").await.json::<Value>();
    let post = &list["items"][0];

    assert_eq!(post["slug"], "loose-post");
    assert_eq!(post["excerpt"], "");
    assert!(post["category_id"].is_null());
    assert_eq!(post["category"]["name"], "Uncategorized");
    assert!(post["category"]["color"].is_null());
}

#[tokio::test]
async fn test_post_listed_with_category_name_and_color() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(common::api_app(state)).unwrap();

    let category_id = create_category(&server, "News", "#FF0000").await;

    server
        .post("/api/posts")
        .json(&json!({"title": "Filed", "content": "Body", "category_id": category_id}))
        .await
        .assert_status(StatusCode::CREATED);

    let list = server.get("/api/posts").await.json::<Value>();
    let post = &list["items"][0];

    assert_eq!(post["category_id"], category_id.as_str());
    assert_eq!(post["category"]["id"], category_id.as_str());
    assert_eq!(post["category"]["name"], "News");
    assert_eq!(post["category"]["color"], "#FF0000");
}

#[tokio::test]
async fn test_posts_listed_newest_first() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(common::api_app(state)).unwrap();

    for title in ["First", "Second", "Third"] {
        server
            .post("/api/posts")
            .json(&json!({"title": title, "content": "Body"}))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let list = server.get("/api/posts").await.json::<Value>();
    let titles: Vec<&str> = list["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();

    assert_eq!(titles, ["Third", "Second", "First"]);
}

#[tokio::test]
async fn test_unknown_category_fails_and_leaves_no_record() {
    let (state, mut rx) = common::create_test_state();
    let server = TestServer::new(common::api_app(state)).unwrap();

    let response = server
        .post("/api/posts")
        .json(&json!({
            "title": "Orphan",
            "content": "Body",
            "category_id": Uuid::new_v4().to_string(),
            "status": "published"
        }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
    assert!(rx.try_recv().is_err());

    let list = server.get("/api/posts").await.json::<Value>();
    assert!(list["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_title_or_content_rejected() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(common::api_app(state)).unwrap();

    server
        .post("/api/posts")
        .json(&json!({"title": "", "content": "Body"}))
        .await
        .assert_status_bad_request();

    server
        .post("/api/posts")
        .json(&json!({"title": "Title", "content": ""}))
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_post_attributed_to_session_user() {
    let (state, _rx) = common::create_test_state();
    let token = common::open_session(&state, "editor@example.com").await;
    let server = TestServer::new(common::api_app(state)).unwrap();

    server
        .post("/api/posts")
        .authorization_bearer(&token)
        .json(&json!({"title": "Mine", "content": "Body"}))
        .await
        .assert_status(StatusCode::CREATED);

    let user = server
        .get("/api/session")
        .authorization_bearer(&token)
        .await
        .json::<Value>();
    let list = server.get("/api/posts").await.json::<Value>();

    assert_eq!(list["items"][0]["author_id"], user["user"]["id"]);
    assert!(list["items"][0]["author_id"].is_string());
}

#[tokio::test]
async fn test_unknown_token_creates_anonymous_post() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(common::api_app(state)).unwrap();

    server
        .post("/api/posts")
        .authorization_bearer("not-a-session")
        .json(&json!({"title": "Anon", "content": "Body"}))
        .await
        .assert_status(StatusCode::CREATED);

    let list = server.get("/api/posts").await.json::<Value>();
    assert!(list["items"][0]["author_id"].is_null());
}

#[tokio::test]
async fn test_webhook_failure_does_not_affect_create() {
    let (state, rx) = common::create_test_state();

    // Receiver that counts deliveries and rejects every one of them.
    let hits = Arc::new(AtomicUsize::new(0));
    let receiver = Router::new()
        .route(
            "/publish",
            post(|State(hits): State<Arc<AtomicUsize>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                StatusCode::INTERNAL_SERVER_ERROR
            }),
        )
        .with_state(hits.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, receiver).await.unwrap();
    });

    let notifier = HttpWebhookNotifier::new(
        Url::parse(&format!("http://{addr}/publish")).unwrap(),
        Duration::from_secs(2),
    )
    .unwrap();
    let worker = tokio::spawn(run_publish_worker(rx, Arc::new(notifier)));

    let server = TestServer::new(common::api_app(state)).unwrap();

    server
        .post("/api/posts")
        .json(&json!({"title": "Live", "content": "Body", "status": "published"}))
        .await
        .assert_status(StatusCode::CREATED);

    let deadline = Instant::now() + Duration::from_secs(5);
    while hits.load(Ordering::SeqCst) == 0 && Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    // Give a retry, if there were one, time to show up.
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    let list = server.get("/api/posts").await.json::<Value>();
    assert_eq!(list["items"].as_array().unwrap().len(), 1);
    assert_eq!(list["items"][0]["title"], "Live");
    assert_eq!(list["items"][0]["status"], "published");

    drop(server);
    worker.abort();
}

#[tokio::test]
async fn test_slow_webhook_still_receives_every_publication() {
    let (tx, rx) = mpsc::channel(10);
    let state = AppState::new(
        Repositories::memory(),
        tx,
        common::TEST_SECRET.to_string(),
        true,
    );

    let hits = Arc::new(AtomicUsize::new(0));
    let receiver = Router::new()
        .route(
            "/publish",
            post(|State(hits): State<Arc<AtomicUsize>>| async move {
                tokio::time::sleep(Duration::from_millis(300)).await;
                hits.fetch_add(1, Ordering::SeqCst);
                StatusCode::NO_CONTENT
            }),
        )
        .with_state(hits.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, receiver).await.unwrap();
    });

    let notifier = HttpWebhookNotifier::new(
        Url::parse(&format!("http://{addr}/publish")).unwrap(),
        Duration::from_secs(5),
    )
    .unwrap();
    let worker = tokio::spawn(run_publish_worker(rx, Arc::new(notifier)));

    let server = TestServer::new(common::api_app(state)).unwrap();

    for i in 0..15 {
        server
            .post("/api/posts")
            .json(&json!({"title": format!("Post {i}"), "content": "Body", "status": "published"}))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let deadline = Instant::now() + Duration::from_secs(10);
    while hits.load(Ordering::SeqCst) < 15 && Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    assert_eq!(hits.load(Ordering::SeqCst), 15);

    drop(server);
    worker.abort();
}
