//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Session guard for routes that require a signed-in user
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use blog_platform::backend::middleware::session_guard;
//!
//! let private = Router::new()
//!     .route("/api/auth/me", get(get_me))
//!     .route_layer(from_fn_with_state(guard, session_guard));
//! ```

pub mod auth;

pub use auth::{extract_token, session_guard, AuthUser, AuthenticatedUser, SessionGuard, TOKEN_COOKIE};
