//! Backend Module
//!
//! The Axum HTTP server for the blog: registration and login with signed
//! session tokens, and post CRUD scoped to the authoring user.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, startup wiring
//! - **`routes`** - Route table and router assembly
//! - **`auth`** - Users, session tokens, auth workflow and handlers
//! - **`posts`** - Posts, comments, post workflow and handlers
//! - **`store`** - Store traits with PostgreSQL and in-memory adapters
//! - **`middleware`** - Session guard
//! - **`error`** - Error taxonomy and its HTTP rendering
//! - **`extract`** - JSON body extractor with JSON rejections
//! - **`health`** - Health endpoint
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── posts/          - Blog posts
//! ├── store/          - Persistence
//! ├── middleware/     - Request middleware
//! ├── error/          - Error types
//! ├── extract.rs      - Request extractors
//! └── health.rs       - Health check
//! ```
//!
//! # Request Flow
//!
//! handler → workflow (`AuthService` / `PostService`) → store trait. Each
//! layer returns `Result<_, BackendError>` and the error renders itself as
//! a JSON response at the boundary.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Blog posts and comments
pub mod posts;

/// Persistence adapters
pub mod store;

/// Middleware for request processing
pub mod middleware;

/// Request extractors
pub mod extract;

/// Health endpoint
pub mod health;

pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
