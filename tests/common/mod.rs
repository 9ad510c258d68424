#![allow(dead_code)]

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use biztime::{app, App, AppState, MemoryStore};
use serde_json::Value;
use tower::ServiceExt;

pub const BODY_LIMIT: usize = 64 * 1024;

/// Router over a fresh in-memory store; the store handle is returned for seeding.
pub fn test_app() -> (App, MemoryStore) {
    let store = MemoryStore::new();
    let router = app(AppState::new(store.clone()), BODY_LIMIT);
    (router, store)
}

pub async fn send(app: &App, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(app: &App, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &App, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn post_json(app: &App, uri: &str, body: Value) -> (StatusCode, Value) {
    with_json(app, "POST", uri, body).await
}

pub async fn put_json(app: &App, uri: &str, body: Value) -> (StatusCode, Value) {
    with_json(app, "PUT", uri, body).await
}

async fn with_json(app: &App, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}
