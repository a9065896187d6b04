/**
 * Application State Management
 *
 * `AppState` holds the workflows and collaborators shared by every handler.
 * The `FromRef` implementations let a handler extract just the part it
 * needs, e.g. `State(posts): State<PostService>`.
 *
 * All fields are cheap to clone: services wrap `Arc`ed stores and the token
 * service holds pre-built keys.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::TokenService;
use crate::backend::middleware::SessionGuard;
use crate::backend::posts::service::PostService;
use crate::backend::store::{HealthCheck, PostStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub posts: PostService,
    pub guard: SessionGuard,
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    /// Wire every workflow to one store
    pub fn new<S>(store: S, tokens: TokenService, bcrypt_cost: u32) -> Self
    where
        S: UserStore + PostStore + HealthCheck + 'static,
    {
        let store = Arc::new(store);
        let users: Arc<dyn UserStore> = store.clone();
        let posts: Arc<dyn PostStore> = store.clone();

        Self {
            auth: AuthService::new(users.clone(), tokens.clone(), bcrypt_cost),
            posts: PostService::new(posts, users.clone()),
            guard: SessionGuard::new(tokens, users),
            health: store,
        }
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for PostService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.posts.clone()
    }
}

impl FromRef<AppState> for SessionGuard {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.guard.clone()
    }
}

impl FromRef<AppState> for Arc<dyn HealthCheck> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.health.clone()
    }
}
