/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, plus conversions from the lower layers
 * (stores, token verification, JSON extraction, blocking-task joins) so workflows can use `?`.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Invalid credentials",
 *   "status": 400,
 *   "field": "password"
 * }
 * ```
 *
 * `field` is present for duplicate and credential errors, `errors` (a list
 * of `{field, message}`) for validation errors.
 */

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::auth::sessions::TokenError;
use crate::backend::error::types::BackendError;
use crate::backend::store::StoreError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status.as_u16(), self);
        }

        let mut body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });
        if let Some(field) = self.field() {
            body["field"] = serde_json::Value::from(field);
        }
        if let Some(errors) = self.field_errors() {
            body["errors"] = serde_json::to_value(errors).unwrap_or_default();
        }

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { field } => BackendError::duplicate(field),
            other => BackendError::internal(other.to_string()),
        }
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => BackendError::TokenExpired,
            TokenError::Malformed(_) => BackendError::InvalidToken,
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        let detail = rejection.body_text();
        tracing::debug!("Rejected request body: {}", detail);
        BackendError::MalformedBody { detail }
    }
}

impl From<tokio::task::JoinError> for BackendError {
    fn from(err: tokio::task::JoinError) -> Self {
        BackendError::internal(format!("Blocking task failed: {}", err))
    }
}
