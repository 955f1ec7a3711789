use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use brokerme::dashboard::router;
use serde_json::Value;
use tower::ServiceExt;

mod helpers;
use helpers::setup_app;

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    let (app, _tmp) = setup_app();
    let response = router(app)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_tree_route_returns_snapshot() {
    let (status, body) = get("/api/tree").await;
    assert_eq!(status, StatusCode::OK);

    let tree: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(tree["label"], "Servers - myservers.json");
    assert_eq!(tree["children"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_children_route() {
    let (status, body) = get("/api/tree/children?path=0/0").await;
    assert_eq!(status, StatusCode::OK);

    let rows: Value = serde_json::from_slice(&body).unwrap();
    let labels: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, ["queue1 QUEUE", "queue2 QUEUE", "queue3 QUEUE"]);
    assert_eq!(rows[0]["path"], "0/0/0");
    assert_eq!(rows[0]["kind"], "queue");
}

#[tokio::test]
async fn test_children_route_defaults_to_root() {
    let (status, body) = get("/api/tree/children").await;
    assert_eq!(status, StatusCode::OK);

    let rows: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_children_route_unknown_path() {
    let (status, _body) = get("/api/tree/children?path=5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_status_route() {
    let (status, body) = get("/api/status").await;
    assert_eq!(status, StatusCode::OK);

    let bar: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(bar["label"], "");
    assert_eq!(bar["progress"], 0.0);
}
