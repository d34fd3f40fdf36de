mod common;

use axum_test::TestServer;
use serde_json::{Value, json};

#[tokio::test]
async fn test_create_category_returns_created_with_empty_body() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(common::api_app(state)).unwrap();

    let response = server
        .post("/api/categories")
        .json(&json!({"name": "Rust Tips", "description": "Small things", "color": "#FF0000"}))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    assert!(response.as_bytes().is_empty());
}

#[tokio::test]
async fn test_created_category_is_listed_with_slug_and_defaults() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(common::api_app(state)).unwrap();

    server
        .post("/api/categories")
        .json(&json!({"name": "  Tech  Trends "}))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server.get("/api/categories").await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "  Tech  Trends ");
    assert_eq!(items[0]["slug"], "-tech-trends-");
    assert_eq!(items[0]["description"], "");
    assert_eq!(items[0]["color"], "#3B82F6");
    assert!(items[0]["id"].is_string());
}

#[tokio::test]
async fn test_categories_listed_by_name() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(common::api_app(state)).unwrap();

    for name in ["Zebra", "Apple", "Mango"] {
        server
            .post("/api/categories")
            .json(&json!({"name": name}))
            .await
            .assert_status(axum::http::StatusCode::CREATED);
    }

    let json = server.get("/api/categories").await.json::<Value>();
    let names: Vec<&str> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, ["Apple", "Mango", "Zebra"]);
}

#[tokio::test]
async fn test_empty_name_rejected() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(common::api_app(state)).unwrap();

    let response = server
        .post("/api/categories")
        .json(&json!({"name": ""}))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["fields"]["name"].is_array());

    let list = server.get("/api/categories").await.json::<Value>();
    assert!(list["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_color_rejected() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(common::api_app(state)).unwrap();

    let response = server
        .post("/api/categories")
        .json(&json!({"name": "News", "color": "blue"}))
        .await;

    response.assert_status_bad_request();
}
