/**
 * Register Handler
 *
 * POST /api/auth/register
 *
 * # Registration Process
 *
 * 1. Validate username, email format and password length
 * 2. Reject an email that is already registered
 * 3. Hash the password with bcrypt
 * 4. Create the user
 * 5. Issue a session token
 * 6. Return 201 with token and public user
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - validation failure or email already registered
/// * `500 Internal Server Error` - hashing, store or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "alice@example.com",
///   "password": "hunter22"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "username": "alice",
///     "email": "alice@example.com",
///     "role": "user",
///     "createdAt": "2024-05-01T12:00:00Z"
///   }
/// }
/// ```
pub async fn register(
    State(auth): State<AuthService>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    tracing::info!("Register request for email: {}", request.email);
    let response = auth.register(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
