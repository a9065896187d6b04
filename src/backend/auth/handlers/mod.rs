//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! ├── login.rs     - User authentication handler
//! └── me.rs        - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - User registration (201)
//! - **`login`** - POST /api/auth/login - User authentication
//! - **`get_me`** - GET /api/auth/me - Current user info (behind the session guard)
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email and password → user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Me**: token → guard resolves the user → public user returned
//!
//! Tokens expire after one hour.

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use types::{AuthResponse, LoginRequest, RegisterRequest};

pub use login::login;
pub use me::get_me;
pub use register::register;
