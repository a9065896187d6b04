/**
 * Session Guard
 *
 * Middleware for routes that require an authenticated user. It takes the
 * token from the `Authorization: Bearer` header, or failing that from the
 * `token` cookie, verifies it, confirms the user still exists and attaches
 * the user to the request extensions.
 *
 * Handlers read the attached user with the `AuthUser` extractor.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{
        header::{AUTHORIZATION, COOKIE},
        request::Parts,
        HeaderMap,
    },
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;
use crate::backend::store::UserStore;
use crate::shared::models::PublicUser;

/// Name of the cookie that may carry the session token
pub const TOKEN_COOKIE: &str = "token";

/// What the guard needs: a verifier and a way to look users up
#[derive(Clone)]
pub struct SessionGuard {
    pub tokens: TokenService,
    pub users: Arc<dyn UserStore>,
}

impl SessionGuard {
    pub fn new(tokens: TokenService, users: Arc<dyn UserStore>) -> Self {
        Self { tokens, users }
    }

    /// Resolve request headers to the user behind the session
    pub async fn authenticate(&self, headers: &HeaderMap) -> Result<PublicUser, BackendError> {
        let token = extract_token(headers).ok_or_else(|| {
            tracing::debug!("Request without session token");
            BackendError::NoToken
        })?;

        let claims = self.tokens.verify(&token).map_err(|e| {
            tracing::warn!("Rejected session token: {}", e);
            BackendError::from(e)
        })?;

        let user = self
            .users
            .find_user_by_id(claims.user.id)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Token for removed user {}", claims.user.id);
                BackendError::UserGone
            })?;

        Ok(user.to_public())
    }
}

/// User resolved by the session guard
#[derive(Clone, Debug)]
pub struct AuthenticatedUser(pub PublicUser);

/// Authentication middleware
///
/// Returns 401 with one of `No token, authorization denied`, `Token expired`,
/// `Invalid token` or `User no longer exists` when the session is not usable.
pub async fn session_guard(
    State(guard): State<SessionGuard>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = guard.authenticate(request.headers()).await?;
    request.extensions_mut().insert(AuthenticatedUser(user));
    Ok(next.run(request).await)
}

/// Pull the session token out of the request headers
///
/// A bearer Authorization header wins. Any other Authorization value is
/// ignored and the `token` cookie is consulted instead.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == TOKEN_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

/// Axum extractor for the authenticated user
///
/// Only meaningful on routes behind `session_guard`; elsewhere it rejects
/// with `NoToken`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub PublicUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .map(|AuthenticatedUser(user)| AuthUser(user.clone()))
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::NoToken
            })
    }
}
