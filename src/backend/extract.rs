//! Request extractors shared by the handlers
//!
//! `JsonBody` behaves like `axum::Json` but rejects with `BackendError`, so
//! an unparseable body gets the same JSON error shape as every other failure.

use axum::extract::FromRequest;
use serde::{Deserialize, Deserializer};

use crate::backend::error::BackendError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(BackendError))]
pub struct JsonBody<T>(pub T);

/// Read a string field that may be JSON `null`
///
/// Paired with `#[serde(default)]`, an absent or `null` field becomes an
/// empty string and is reported by field validation like any other blank.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
