/**
 * Session Tokens
 *
 * This module issues and verifies the signed, time-limited tokens that carry
 * a user's identity between requests. Tokens are HS256 JWTs whose claims
 * embed `{ user: { id, role } }` and expire exactly one hour after issue.
 * There is no refresh: clients log in again.
 *
 * The signing secret is injected through `TokenService::new`, never read
 * from the environment here.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::models::Role;

/// Token lifetime in seconds
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Identity embedded in a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUser {
    pub id: Uuid,
    pub role: Role,
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user: TokenUser,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Why a token was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("malformed token: {0}")]
    Malformed(String),
}

/// Issues and verifies session tokens
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service signing with `secret`
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(TOKEN_TTL_SECS),
        }
    }

    /// Issue a token for `id` valid for one hour from now
    pub fn issue(&self, id: Uuid, role: Role) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(id, role, Utc::now())
    }

    /// Issue a token as if it were created at `issued_at`
    pub fn issue_at(
        &self,
        id: Uuid,
        role: Role,
        issued_at: DateTime<Utc>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            user: TokenUser { id, role },
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verify a token's signature, structure and expiry
    ///
    /// Verification has no side effects. Expiry is checked with zero leeway.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed(e.to_string()),
            })
    }
}
