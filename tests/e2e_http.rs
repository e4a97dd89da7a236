// tests/e2e_http.rs
use axum::http::StatusCode;
use serde_json::{Value, json};
use tower::util::ServiceExt as _;
use uuid::Uuid;

mod support;

use support::{assert_error_response, empty_request, json_request, read_json};

fn article_payload(title: &str, name: &str, email: &str) -> Value {
    json!({
        "title": title,
        "body": format!("{title} body"),
        "author": { "name": name, "email": email }
    })
}

async fn create_article(app: &axum::Router, payload: &Value) -> String {
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/articles", payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = read_json(resp).await;
    json["id"].as_str().expect("id in response").to_string()
}

/// /health が 200 と JSON を返すことを確認する
#[tokio::test]
async fn e2e_health_returns_ok() {
    let app = support::make_test_router();

    let resp = app.oneshot(empty_request("GET", "/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!({ "status": "ok" }));

    let direct = blog_core::presentation::http::routes::health().await;
    assert_eq!(direct.0.status, "ok");
}

#[tokio::test]
async fn e2e_create_then_get_returns_hydrated_article() {
    let app = support::make_test_router();
    let id = create_article(&app, &article_payload("Hello", "Ada", "ada@example.com")).await;
    assert!(Uuid::parse_str(&id).is_ok());

    let resp = app
        .oneshot(empty_request("GET", &format!("/api/v1/articles/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let article = read_json(resp).await;
    assert_eq!(article["id"], id);
    assert_eq!(article["title"], "Hello");
    assert_eq!(article["body"], "Hello body");
    assert_eq!(article["author"]["name"], "Ada");
    assert_eq!(article["author"]["email"], "ada@example.com");
    assert!(Uuid::parse_str(article["author"]["id"].as_str().unwrap()).is_ok());
    assert_eq!(article["posted_at"], "2024-01-01T12:30:45Z");
}

#[tokio::test]
async fn e2e_list_hydrates_every_author() {
    let app = support::make_test_router();
    create_article(&app, &article_payload("one", "Ada", "ada@example.com")).await;
    create_article(&app, &article_payload("two", "Ada", "ada@example.com")).await;
    create_article(&app, &article_payload("three", "Grace", "grace@example.com")).await;

    let resp = app
        .clone()
        .oneshot(empty_request("GET", "/api/v1/articles"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let list = read_json(resp).await;
    let items = list.as_array().expect("array");
    assert_eq!(items.len(), 3);
    for item in items {
        assert!(item["author"]["name"].is_string(), "not hydrated: {item}");
        assert!(item["author"]["email"].is_string(), "not hydrated: {item}");
    }

    let resp = app
        .oneshot(empty_request("GET", "/api/v1/authors"))
        .await
        .unwrap();
    let authors = read_json(resp).await;
    assert_eq!(authors.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn e2e_empty_list_is_an_empty_array() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(empty_request("GET", "/api/v1/articles"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!([]));
}

#[tokio::test]
async fn e2e_malformed_id_returns_400() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(empty_request("GET", "/api/v1/articles/not-a-uuid"))
        .await
        .unwrap();
    let message = assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert!(message.contains("invalid article id"), "message: {message}");
}

#[tokio::test]
async fn e2e_unknown_article_returns_404() {
    let app = support::make_test_router();
    let uri = format!("/api/v1/articles/{}", Uuid::new_v4());

    let resp = app.clone().oneshot(empty_request("GET", &uri)).await.unwrap();
    let message = assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    assert_eq!(message, "article not found");

    let resp = app.oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn e2e_delete_article_then_get_returns_404() {
    let app = support::make_test_router();
    let id = create_article(&app, &article_payload("bye", "Ada", "ada@example.com")).await;
    let uri = format!("/api/v1/articles/{id}");

    let resp = app.clone().oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!({ "status": "deleted" }));

    let resp = app.oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn e2e_storage_failure_returns_503_without_details() {
    let app = support::make_failing_router();

    for (method, uri) in [
        ("GET", "/api/v1/articles".to_string()),
        ("GET", format!("/api/v1/articles/{}", Uuid::new_v4())),
        ("GET", "/api/v1/authors".to_string()),
    ] {
        let resp = app.clone().oneshot(empty_request(method, &uri)).await.unwrap();
        let message =
            assert_error_response(resp, StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable")
                .await;
        assert_eq!(message, "service unavailable");
    }

    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/v1/articles",
            &article_payload("t", "Ada", "ada@example.com"),
        ))
        .await
        .unwrap();
    let message =
        assert_error_response(resp, StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable").await;
    assert!(!message.contains("password"));
}

#[tokio::test]
async fn e2e_invalid_json_returns_400() {
    let app = support::make_test_router();

    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/articles")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{ not json"))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let missing_author = json!({ "title": "t", "body": "b" });
    let resp = app
        .oneshot(json_request("POST", "/api/v1/articles", &missing_author))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn e2e_blank_fields_return_400() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/v1/articles",
            &article_payload("   ", "Ada", "ada@example.com"),
        ))
        .await
        .unwrap();
    let message = assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert!(message.contains("title"), "message: {message}");
}

#[tokio::test]
async fn e2e_unsupported_method_returns_405() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(empty_request("PUT", "/api/v1/articles"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn e2e_create_author_is_idempotent() {
    let app = support::make_test_router();
    let payload = json!({ "name": "Ada", "email": "ada@example.com" });

    let first = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/authors", &payload))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);
    let first = read_json(first).await;

    let second = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/authors", &payload))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CREATED);
    assert_eq!(read_json(second).await["id"], first["id"]);

    let id = first["id"].as_str().unwrap();
    let resp = app
        .oneshot(empty_request("GET", &format!("/api/v1/authors/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        read_json(resp).await,
        json!({ "id": id, "name": "Ada", "email": "ada@example.com" })
    );
}

#[tokio::test]
async fn e2e_delete_author_by_name_and_email_cascades() {
    let app = support::make_test_router();
    let article_id = create_article(&app, &article_payload("a", "Ada", "ada@example.com")).await;

    let uri = "/api/v1/authors?name=Ada&email=ada%40example.com";
    let resp = app.clone().oneshot(empty_request("DELETE", uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!({ "status": "deleted" }));

    let resp = app.clone().oneshot(empty_request("DELETE", uri)).await.unwrap();
    let message = assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    assert_eq!(message, "author not found");

    let resp = app
        .oneshot(empty_request("GET", &format!("/api/v1/articles/{article_id}")))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn e2e_delete_author_without_key_returns_400() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(empty_request("DELETE", "/api/v1/authors?name=Ada"))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn e2e_delete_author_by_id() {
    let app = support::make_test_router();
    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/authors",
            &json!({ "name": "Grace", "email": "grace@example.com" }),
        ))
        .await
        .unwrap();
    let id = read_json(created).await["id"].as_str().unwrap().to_string();
    let uri = format!("/api/v1/authors/{id}");

    let resp = app.clone().oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn e2e_openapi_document_is_served() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(empty_request("GET", "/openapi.json"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = read_json(resp).await;
    assert!(doc["paths"]["/api/v1/articles/{id}"].is_object());
    assert!(doc["paths"]["/api/v1/authors"].is_object());
}
