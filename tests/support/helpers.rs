// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use blog_core::application::services::ApplicationServices;
use blog_core::domain::{article::ArticleRepository, author::AuthorRepository};
use blog_core::infrastructure::repositories::InMemoryBlogRepository;
use blog_core::infrastructure::time::FixedClock;
use blog_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub fn memory_store() -> InMemoryBlogRepository {
    InMemoryBlogRepository::new(Arc::new(FixedClock(mocks::fixed_now())))
}

pub fn services_over(
    article_repo: Arc<dyn ArticleRepository>,
    author_repo: Arc<dyn AuthorRepository>,
) -> ApplicationServices {
    ApplicationServices::new(article_repo, author_repo)
}

pub fn memory_services() -> ApplicationServices {
    let store = memory_store();
    services_over(Arc::new(store.clone()), Arc::new(store))
}

pub fn build_test_state() -> HttpState {
    HttpState {
        services: Arc::new(memory_services()),
    }
}

pub fn make_test_router() -> axum::Router {
    build_router(build_test_state())
}

/// Router whose every storage call fails.
pub fn make_failing_router() -> axum::Router {
    let failing = Arc::new(mocks::FailingRepository::default());
    let services = services_over(failing.clone(), failing);
    build_router(HttpState {
        services: Arc::new(services),
    })
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("body is not JSON ({e}): {}", String::from_utf8_lossy(&bytes)))
}

/// Assert that a response is an `ErrorResponse` JSON with the expected status
/// and `error` string; returns the `message` field.
pub async fn assert_error_response(resp: Response, status: StatusCode, error: &str) -> String {
    assert_eq!(resp.status(), status);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = read_json(resp).await;
    assert_eq!(json["error"], error);
    json["message"].as_str().unwrap_or_default().to_string()
}
