/**
 * Authentication Handler Types
 *
 * Request and response bodies for register, login and me. Missing or `null`
 * request fields deserialize as empty strings and are reported by validation.
 */

use serde::{Deserialize, Serialize};

use crate::backend::extract::null_as_empty;
use crate::shared::models::PublicUser;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    /// Plain text; hashed before storage
    #[serde(default, deserialize_with = "null_as_empty")]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub password: String,
}

/// Auth response
///
/// Returned by register and login. Contains the session token and the
/// public projection of the user, never the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthResponse {
    /// Signed session token, valid for one hour
    pub token: String,
    pub user: PublicUser,
}
