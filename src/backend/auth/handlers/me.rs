//! GET /api/auth/me

use axum::{extract::State, response::Json};

use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::models::PublicUser;

/// Current user, re-read from the store
pub async fn get_me(
    State(auth): State<AuthService>,
    AuthUser(user): AuthUser,
) -> Result<Json<PublicUser>, BackendError> {
    Ok(Json(auth.current_user(user.id).await?))
}
