//! Posts Module
//!
//! Blog posts and the comments that hang off them.
//!
//! # Module Structure
//!
//! ```text
//! posts/
//! ├── mod.rs         - Module exports
//! ├── db.rs          - Post model and Postgres queries
//! ├── comments.rs    - Comment model and Postgres queries
//! ├── pagination.rs  - Page/limit parsing
//! ├── service.rs     - Validation, ownership and author expansion
//! └── handlers.rs    - HTTP handlers
//! ```
//!
//! Comments have no HTTP surface; they exist so that deleting a post can
//! remove them in the same transaction.

pub mod db;
pub mod comments;
pub mod pagination;
pub mod service;
pub mod handlers;

pub use db::{NewPost, Post, PostChanges};
pub use comments::{Comment, NewComment};
pub use pagination::{PageQuery, PageRequest};
pub use service::{PostInput, PostService};
