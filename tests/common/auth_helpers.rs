//! Authentication test helpers
//!
//! Register users through the API and build auth headers.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;
use uuid::Uuid;

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Register a user through `POST /api/auth/register`
pub async fn register_user(server: &TestServer, username: &str, email: &str) -> TestUser {
    let password = "password123";
    let response = server
        .post("/api/auth/register")
        .json(&serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED, "{}", response.text());

    let body: Value = response.json();
    TestUser {
        id: body["user"]["id"]
            .as_str()
            .and_then(|id| Uuid::parse_str(id).ok())
            .expect("user id in register response"),
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        token: body["token"]
            .as_str()
            .expect("token in register response")
            .to_string(),
    }
}

/// Register a user with a unique email
pub async fn register_unique_user(server: &TestServer) -> TestUser {
    let suffix = Uuid::new_v4().simple().to_string();
    let username = format!("user_{}", &suffix[..8]);
    let email = format!("{}@example.com", username);
    register_user(server, &username, &email).await
}

/// Create a post as `user` and return its id
pub async fn create_test_post(server: &TestServer, user: &TestUser, title: &str) -> String {
    let response = server
        .post("/api/posts")
        .authorization_bearer(&user.token)
        .json(&serde_json::json!({
            "title": title,
            "content": "Some content that is long enough",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED, "{}", response.text());

    let body: Value = response.json();
    body["id"].as_str().expect("post id").to_string()
}
