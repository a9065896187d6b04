//! Shared Module
//!
//! This module contains types and data structures that cross the boundary
//! between the workflows and the HTTP surface. Everything here is plain data:
//! public projections of stored records, post views with their author
//! expanded, the pagination envelope, and the field validation rules applied
//! to incoming payloads.
//!
//! # Overview
//!
//! - **`models`** - Public projections (`PublicUser`, `AuthorSummary`,
//!   `PostView`, `PostPage`) and the `Role` enum
//! - **`validation`** - Field rules for registration, login and post payloads
//! - **`error`** - `ValidationError`, the collected list of failing fields
//!
//! None of these types carry a password hash; the credential record lives
//! in `backend::auth::users` and is only ever projected into `PublicUser`.

/// Public projections and wire types
pub mod models;

/// Field validation rules
pub mod validation;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use error::{FieldError, ValidationError};
pub use models::{AuthorSummary, PostPage, PostView, PublicUser, Role};
