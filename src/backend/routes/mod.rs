//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports and documentation
//! ├── router.rs      - Router assembly, fallback, CORS and tracing
//! └── api_routes.rs  - `/api` endpoints
//! ```
//!
//! Public endpoints (register, login, post reads, health) and guarded ones
//! (me, post writes) live in the same table; guarded methods carry the
//! session guard as a per-method route layer.

/// Main router creation
pub mod router;

/// API endpoint table
pub mod api_routes;

pub use router::{cors_layer, create_router};
