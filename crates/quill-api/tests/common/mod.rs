//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use quill_posts::domain::events::PostEvent;
use quill_posts::domain::history::load_history;
use quill_test_support::SequenceIdGenerator;
use tower::ServiceExt;

use quill_api::routes;
use quill_api::state::AppState;

/// Build application state from `history`, handing out `ids` for new posts.
pub fn build_state(history: &[PostEvent], ids: SequenceIdGenerator) -> AppState {
    AppState::new(load_history(history).unwrap(), Arc::new(ids), 20)
}

/// Build the full app router. Uses the same route structure as `main.rs`.
pub fn build_test_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::pages::router())
        .merge(routes::posts::router())
        .with_state(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, body_bytes.to_vec())
}

fn json_of(bytes: &[u8]) -> serde_json::Value {
    if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(bytes).unwrap()
    }
}

/// Send a request with a JSON body and return the response.
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let (status, bytes) = send(app, request).await;
    (status, json_of(&bytes))
}

/// Send a request without a body and return the JSON response.
pub async fn send_empty(app: Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let (status, bytes) = send(app, request).await;
    (status, json_of(&bytes))
}

/// Send a GET request and return the response body as text.
pub async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let (status, bytes) = send(app, request).await;
    (status, String::from_utf8(bytes).unwrap())
}
