//! Authentication Module
//!
//! User registration, login and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and Postgres queries
//! ├── sessions.rs     - Token signing and verification
//! ├── service.rs      - Register, login and current-user workflow
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never leave the
//!   backend
//! - Tokens are HS256-signed and expire one hour after issue
//! - Invalid credentials return 400 tagged with the failing field

/// User data model and database operations
pub mod users;

/// Token generation and validation
pub mod sessions;

/// Auth workflow
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest};
pub use handlers::{get_me, login, register};
pub use service::AuthService;
pub use sessions::{Claims, TokenError, TokenService, TokenUser};
pub use users::{NewUser, User};
