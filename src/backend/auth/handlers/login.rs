/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * Looks the user up by email, verifies the password with bcrypt and issues
 * a token identical in shape to registration's. A failed attempt is tagged
 * with the field whose check failed (`email` or `password`).
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed payload or invalid credentials
/// * `500 Internal Server Error` - store or signing failure
pub async fn login(
    State(auth): State<AuthService>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.email);
    Ok(Json(auth.login(request).await?))
}
