//! Router-level tests for the liveness endpoint.
//!
//! Requests are driven straight through the router with `oneshot`, so no
//! socket is bound.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use tower::ServiceExt;
use uuid::Uuid;

use streetpass_backend::create_router;

async fn send(method: Method, uri: &str) -> Response {
    create_router()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_returns_ok_json() {
    let response = send(Method::GET, "/api/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(
        body_string(response).await,
        r#"{"status":"OK","message":"everything is alright"}"#
    );
}

#[tokio::test]
async fn health_body_has_exactly_status_and_message() {
    let response = send(Method::GET, "/api/health").await;
    let value: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();

    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["status"], "OK");
    assert_eq!(object["message"], "everything is alright");
}

#[tokio::test]
async fn health_is_idempotent() {
    let first = body_string(send(Method::GET, "/api/health").await).await;

    for _ in 0..10 {
        let response = send(Method::GET, "/api/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, first);
    }
}

#[tokio::test]
async fn health_is_never_cached() {
    let response = send(Method::GET, "/api/health").await;
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
}

#[tokio::test]
async fn each_response_carries_a_fresh_request_id() {
    let first = send(Method::GET, "/api/health").await;
    let second = send(Method::GET, "/api/health").await;

    let first_id: Uuid = first.headers()["x-request-id"].to_str().unwrap().parse().unwrap();
    let second_id: Uuid = second.headers()["x-request-id"].to_str().unwrap().parse().unwrap();
    assert_ne!(first_id, second_id);
}

#[tokio::test]
async fn head_is_answered_by_get_route() {
    let response = send(Method::HEAD, "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.is_empty());
}

#[tokio::test]
async fn other_methods_are_not_allowed() {
    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let response = send(method.clone(), "/api/health").await;
        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "{method} /api/health"
        );
    }
}

#[tokio::test]
async fn other_paths_are_not_found() {
    for path in ["/api/healthz", "/api/health/extra", "/health", "/api", "/"] {
        let response = send(Method::GET, path).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {path}");
    }
}
