//! Authentication API integration tests
//!
//! Register, login, the current-user endpoint and the session guard.

use axum::http::{header::COOKIE, HeaderValue, StatusCode};
use blog_platform::shared::models::Role;
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{
    assert_error, create_test_server, create_test_server_with_store, register_user, test_tokens,
};

#[tokio::test]
async fn test_register_success() {
    let server = create_test_server();

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert_eq!(body["user"]["role"], "user");
    assert!(body["user"]["createdAt"].is_string());
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"].get("password_hash").is_none());

    let claims = test_tokens()
        .verify(body["token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.user.id.to_string(), body["user"]["id"]);
    assert_eq!(claims.user.role, Role::User);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = create_test_server();
    register_user(&server, "alice", "alice@example.com").await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice2",
            "email": "alice@example.com",
            "password": "password123"
        }))
        .await;

    let body = assert_error(&response, StatusCode::BAD_REQUEST, "User already exists");
    assert_eq!(body["field"], "email");
}

#[tokio::test]
async fn test_register_validation_errors() {
    let server = create_test_server();

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": "nope", "password": "12345" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["username", "email", "password"]);
}

#[tokio::test]
async fn test_register_null_username_is_a_validation_error() {
    let server = create_test_server();

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "username": null, "email": "null@example.com", "password": "password123" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["errors"][0]["field"], "username");
    assert_eq!(body["errors"][0]["message"], "Username is required");
    assert_eq!(body["errors"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_register_malformed_json() {
    let server = create_test_server();

    let response = server
        .post("/api/auth/register")
        .content_type("application/json")
        .bytes("{ not json".into())
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "Invalid request body");
    assert!(!response.text().contains("column"));
}

#[tokio::test]
async fn test_login_success() {
    let server = create_test_server();
    let user = register_user(&server, "alice", "alice@example.com").await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": user.email, "password": user.password }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["user"]["id"], user.id.to_string());
    assert_eq!(body["user"]["username"], "alice");
    let claims = test_tokens().verify(body["token"].as_str().unwrap()).unwrap();
    assert_eq!(claims.user.id, user.id);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let server = create_test_server();
    register_user(&server, "alice", "alice@example.com").await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "bob@example.com", "password": "password123" }))
        .await;
    let body = assert_error(&response, StatusCode::BAD_REQUEST, "Invalid credentials");
    assert_eq!(body["field"], "email");

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "alice@example.com", "password": "wrong-password" }))
        .await;
    let body = assert_error(&response, StatusCode::BAD_REQUEST, "Invalid credentials");
    assert_eq!(body["field"], "password");
}

#[tokio::test]
async fn test_me_with_bearer_and_cookie() {
    let server = create_test_server();
    let user = register_user(&server, "alice", "alice@example.com").await;

    let response = server
        .get("/api/auth/me")
        .authorization_bearer(&user.token)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["id"], user.id.to_string());
    assert_eq!(body["email"], "alice@example.com");
    assert!(body.get("password").is_none());

    let cookie = HeaderValue::from_str(&format!("token={}", user.token)).unwrap();
    let response = server.get("/api/auth/me").add_header(COOKIE, cookie).await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_guard_failures() {
    let (server, store) = create_test_server_with_store();
    let user = register_user(&server, "alice", "alice@example.com").await;

    let response = server.get("/api/auth/me").await;
    assert_error(&response, StatusCode::UNAUTHORIZED, "No token, authorization denied");

    let response = server
        .get("/api/auth/me")
        .authorization_bearer("not.a.token")
        .await;
    assert_error(&response, StatusCode::UNAUTHORIZED, "Invalid token");

    let stale = test_tokens()
        .issue_at(user.id, Role::User, Utc::now() - Duration::minutes(61))
        .unwrap();
    let response = server.get("/api/auth/me").authorization_bearer(&stale).await;
    assert_error(&response, StatusCode::UNAUTHORIZED, "Token expired");

    let recent = test_tokens()
        .issue_at(user.id, Role::User, Utc::now() - Duration::minutes(59))
        .unwrap();
    let response = server.get("/api/auth/me").authorization_bearer(&recent).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    store.remove_user(user.id).await;
    let response = server
        .get("/api/auth/me")
        .authorization_bearer(&user.token)
        .await;
    assert_error(&response, StatusCode::UNAUTHORIZED, "User no longer exists");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_invalid() {
    let server = create_test_server();
    let user = register_user(&server, "alice", "alice@example.com").await;

    let forged = blog_platform::backend::auth::TokenService::new("some-other-secret")
        .issue(user.id, Role::Admin)
        .unwrap();
    let response = server.get("/api/auth/me").authorization_bearer(&forged).await;
    assert_error(&response, StatusCode::UNAUTHORIZED, "Invalid token");
}
