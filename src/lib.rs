//! Blog Platform - Main Library
//!
//! A REST backend for a blogging application: user registration and login
//! with signed, time-limited session tokens, and create/read/update/delete
//! on posts, where only a post's author may change or remove it.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared by the workflows and the HTTP surface
//!   - Public user projection, post views, page envelope
//!   - Field validation and the validation error type
//!
//! - **`backend`** - The Axum server
//!   - Auth and post workflows over pluggable stores
//!   - PostgreSQL (sqlx) and in-memory store adapters
//!   - Session guard, error mapping, configuration
//!
//! # Usage
//!
//! ```rust,no_run
//! use blog_platform::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Storage
//!
//! `STORAGE=postgres` (the default) connects to `DATABASE_URL` and runs the
//! migrations in `migrations/`. `STORAGE=memory` keeps everything in process
//! and is what the integration tests use.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
