//! Common test utilities and helpers
//!
//! - In-memory test server
//! - Authentication test helpers
//! - PostgreSQL fixture (`postgres-tests` feature)
//! - Custom assertion helpers

pub mod app;
pub mod auth_helpers;
#[cfg(feature = "postgres-tests")]
pub mod database;

// Re-export commonly used utilities
pub use app::*;
pub use assertions::*;
pub use auth_helpers::*;
