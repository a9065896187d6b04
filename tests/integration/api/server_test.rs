//! Server-level integration tests: health, fallback and CORS

use axum::http::{
    header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN},
    HeaderValue, StatusCode,
};
use serde_json::{json, Value};

use crate::common::{assert_error, create_test_server, TEST_FRONTEND};

#[tokio::test]
async fn test_health() {
    let server = create_test_server();

    let response = server.get("/api/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({ "status": "OK", "database": "Connected" }));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let server = create_test_server();

    let response = server.get("/api/nothing-here").await;

    assert_error(&response, StatusCode::NOT_FOUND, "Route not found");
}

#[tokio::test]
async fn test_cors_allows_frontend_origin() {
    let server = create_test_server();

    let response = server
        .get("/api/health")
        .add_header(ORIGIN, HeaderValue::from_static(TEST_FRONTEND))
        .await;

    assert_eq!(response.header(ACCESS_CONTROL_ALLOW_ORIGIN), TEST_FRONTEND);
    assert_eq!(response.header(ACCESS_CONTROL_ALLOW_CREDENTIALS), "true");
}

#[tokio::test]
async fn test_cors_ignores_other_origins() {
    let server = create_test_server();

    let response = server
        .get("/api/health")
        .add_header(ORIGIN, HeaderValue::from_static("https://evil.example.com"))
        .await;

    assert!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
