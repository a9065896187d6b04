//! Server Module
//!
//! Configuration, shared state and startup wiring for the Axum server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs     - Module exports and documentation
//! ├── config.rs  - Environment configuration and database connection
//! ├── state.rs   - AppState and FromRef implementations
//! └── init.rs    - Store selection and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `ServerConfig::from_env` validates the environment
//! 2. **Storage**: PostgreSQL (migrated on connect) or the in-memory store
//! 3. **State**: auth and post workflows share one store
//! 4. **Router**: public and guarded routes, CORS and request tracing
//!
//! # Example
//!
//! ```rust,no_run
//! use blog_platform::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig, StorageBackend};
pub use init::{build_state, create_app};
pub use state::AppState;
