/**
 * Backend Error Types
 *
 * One enum carries every failure a workflow can produce. Handlers return
 * `Result<_, BackendError>` and let `IntoResponse` pick the status code, so
 * the mapping from failure kind to HTTP status lives in exactly one place.
 *
 * # Error Categories
 *
 * ## Input errors
 *
 * Malformed or unparseable payloads, duplicate emails, bad credentials and malformed ids.
 *
 * ## Session errors
 *
 * Raised by the session guard: missing, expired or invalid tokens, and
 * tokens whose user has since disappeared.
 *
 * ## Ownership and lookup errors
 *
 * Mutating someone else's post, or addressing a post or user that does not
 * exist.
 *
 * ## Internal errors
 *
 * Store faults and anything else unexpected. The message is for the log
 * only and never reaches the client.
 */

use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::shared::error::{FieldError, ValidationError};

/// Which half of a login attempt was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialField {
    Email,
    Password,
}

impl CredentialField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialField::Email => "email",
            CredentialField::Password => "password",
        }
    }
}

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use blog_platform::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("Post not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// One or more payload fields are malformed or out of range
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Body is not JSON or does not match the expected shape
    ///
    /// `detail` is the extractor's diagnosis; it is logged, never sent.
    #[error("Invalid request body")]
    MalformedBody { detail: String },

    /// A uniqueness constraint was violated
    #[error("{field} already exists")]
    DuplicateField { field: String },

    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials { field: CredentialField },

    /// No bearer header and no token cookie
    #[error("No token, authorization denied")]
    NoToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    /// Token verified but its user no longer exists
    #[error("User no longer exists")]
    UserGone,

    /// Requester is not the author
    #[error("{message}")]
    Forbidden { message: String },

    #[error("{message}")]
    NotFound { message: String },

    /// Path id is not a valid identity
    #[error("Invalid ID format")]
    InvalidId,

    /// Authenticated identity vanished between the guard and the workflow
    #[error("User not found")]
    UserNotFound,

    /// Unexpected store or logic fault
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BackendError {
    pub fn duplicate(field: impl Into<String>) -> Self {
        Self::DuplicateField {
            field: field.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::MalformedBody { .. }
            | Self::DuplicateField { .. }
            | Self::InvalidCredentials { .. }
            | Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::NoToken | Self::TokenExpired | Self::InvalidToken | Self::UserGone => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message
    ///
    /// Internal faults collapse to a generic message; the detail is only
    /// available through `Display` for logging.
    pub fn message(&self) -> String {
        match self {
            Self::Internal { .. } => "Server error".to_string(),
            Self::DuplicateField { .. } => "User already exists".to_string(),
            other => other.to_string(),
        }
    }

    /// The request field this error is about, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::DuplicateField { field } => Some(field.as_str()),
            Self::InvalidCredentials { field } => Some(field.as_str()),
            _ => None,
        }
    }

    /// Per-field details for validation failures
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            Self::Validation(errors) => Some(&errors.errors),
            _ => None,
        }
    }
}
