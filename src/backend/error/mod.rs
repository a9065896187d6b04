//! Backend Error Module
//!
//! This module defines the failure kinds every workflow can return and how
//! they are rendered at the HTTP boundary.
//!
//! # Architecture
//!
//! - **`types`** - `BackendError`, its constructors and the status code map
//! - **`conversion`** - `IntoResponse` and conversions from store and token
//!   errors
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Status Codes
//!
//! | Kind                                                   | Status |
//! |--------------------------------------------------------|--------|
//! | `Validation`, `MalformedBody`, `DuplicateField`, `InvalidCredentials`, `InvalidId` | 400 |
//! | `NoToken`, `TokenExpired`, `InvalidToken`, `UserGone`  | 401    |
//! | `Forbidden`                                            | 403    |
//! | `NotFound`, `UserNotFound`                             | 404    |
//! | `Internal`                                             | 500    |
//!
//! Internal faults are logged server-side and rendered as a generic
//! `Server error` body.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, CredentialField};
