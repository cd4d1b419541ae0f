// tests/support/helpers.rs
use super::mocks::InMemoryArticles;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

use kiji::application::services::ApplicationServices;
use kiji::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use kiji::presentation::http::{routes::build_router, state::HttpState};

pub fn make_router_with(
    write_repo: Arc<dyn ArticleWriteRepository>,
    read_repo: Arc<dyn ArticleReadRepository>,
) -> axum::Router {
    let services = Arc::new(ApplicationServices::new(write_repo, read_repo));
    build_router(HttpState { services })
}

/// Router over a fresh in-memory store. The store is also returned so
/// tests can assert on persisted state directly.
pub fn make_test_router() -> (axum::Router, Arc<InMemoryArticles>) {
    let store = Arc::new(InMemoryArticles::new());
    let router = make_router_with(
        Arc::clone(&store) as Arc<dyn ArticleWriteRepository>,
        Arc::clone(&store) as Arc<dyn ArticleReadRepository>,
    );
    (router, store)
}

pub async fn send_json(
    router: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<&Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(value).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    read_json(response).await
}

pub async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| panic!("non-JSON body: {}", String::from_utf8_lossy(&bytes)));
    (status, json)
}

pub fn assert_message(json: &Value, expected: &str) {
    assert_eq!(
        json.get("message").and_then(Value::as_str),
        Some(expected),
        "unexpected message in {json}"
    );
}
