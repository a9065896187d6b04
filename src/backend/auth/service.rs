/**
 * Auth Workflow
 *
 * Registration, login and the current-user lookup. Password hashing and
 * verification run on the blocking pool since bcrypt is deliberately slow.
 */

use std::sync::Arc;

use uuid::Uuid;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest, RegisterRequest};
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::NewUser;
use crate::backend::error::{BackendError, CredentialField};
use crate::backend::store::UserStore;
use crate::shared::models::{PublicUser, Role};
use crate::shared::validation::{validate_login, validate_registration};

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: TokenService,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenService, bcrypt_cost: u32) -> Self {
        Self {
            users,
            tokens,
            bcrypt_cost,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, BackendError> {
        validate_registration(&request.username, &request.email, &request.password)?;

        if self.users.find_user_by_email(&request.email).await?.is_some() {
            tracing::warn!("Email already registered: {}", request.email);
            return Err(BackendError::duplicate("email"));
        }

        let cost = self.bcrypt_cost;
        let password = request.password;
        let password_hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await?
            .map_err(|e| BackendError::internal(format!("Failed to hash password: {}", e)))?;

        // A concurrent registration can still win the unique index; the
        // store reports that as Duplicate.
        let user = self
            .users
            .insert_user(NewUser {
                username: request.username.trim().to_string(),
                email: request.email,
                password_hash,
                role: Role::User,
            })
            .await?;

        let token = self.issue(user.id, user.role)?;
        tracing::info!("User registered: {} ({})", user.username, user.email);

        Ok(AuthResponse {
            token,
            user: user.to_public(),
        })
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, BackendError> {
        validate_login(&request.email, &request.password)?;

        let user = self
            .users
            .find_user_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Login for unknown email: {}", request.email);
                BackendError::InvalidCredentials {
                    field: CredentialField::Email,
                }
            })?;

        let password = request.password;
        let stored_hash = user.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &stored_hash))
            .await?
            .map_err(|e| BackendError::internal(format!("Password verification failed: {}", e)))?;

        if !valid {
            tracing::warn!("Wrong password for: {}", user.email);
            return Err(BackendError::InvalidCredentials {
                field: CredentialField::Password,
            });
        }

        let token = self.issue(user.id, user.role)?;
        tracing::info!("User logged in: {} ({})", user.username, user.email);

        Ok(AuthResponse {
            token,
            user: user.to_public(),
        })
    }

    /// Public projection of the user behind a verified token
    pub async fn current_user(&self, id: Uuid) -> Result<PublicUser, BackendError> {
        self.users
            .find_user_by_id(id)
            .await?
            .map(|user| user.to_public())
            .ok_or(BackendError::UserNotFound)
    }

    fn issue(&self, id: Uuid, role: Role) -> Result<String, BackendError> {
        self.tokens
            .issue(id, role)
            .map_err(|e| BackendError::internal(format!("Failed to sign token: {}", e)))
    }
}
