//! Store Module
//!
//! The database is a collaborator, not part of the workflows. This module
//! defines the traits the workflows talk to and two adapters behind them.
//!
//! # Traits
//!
//! - **`UserStore`** - credential records, unique by email
//! - **`PostStore`** - posts, including the post+comments cascade delete
//! - **`CommentStore`** - comment records that reference a post
//! - **`HealthCheck`** - live connectivity probe for `/api/health`
//!
//! # Adapters
//!
//! - **`postgres::PgStore`** - sqlx over a `PgPool`
//! - **`memory::MemoryStore`** - a single `RwLock`-guarded map, used by tests
//!   and by `STORAGE=memory`
//!
//! Both adapters assign ids and timestamps themselves, so a workflow never
//! has to.
//!
//! # Atomicity
//!
//! `PostStore::delete_post_cascade` removes a post and every comment that
//! references it as one unit. `PgStore` wraps both statements in a
//! transaction; `MemoryStore` holds its write lock across both removals.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, User};
use crate::backend::posts::comments::{Comment, NewComment};
use crate::backend::posts::db::{NewPost, Post, PostChanges};

/// PostgreSQL adapter
pub mod postgres;

/// In-memory adapter
pub mod memory;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Store-layer failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write
    #[error("duplicate value for unique field '{field}'")]
    Duplicate { field: String },

    /// A foreign key pointed at a record that does not exist
    #[error("referenced {field} does not exist")]
    MissingReference { field: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Credential Store
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user. Fails with `Duplicate { field: "email" }` if the
    /// email is taken.
    async fn insert_user(&self, user: NewUser) -> StoreResult<User>;

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// Fetch every user in `ids`; unknown ids are skipped
    async fn find_users_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<User>>;
}

/// Post Store
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn insert_post(&self, post: NewPost) -> StoreResult<Post>;

    async fn find_post(&self, id: Uuid) -> StoreResult<Option<Post>>;

    /// Posts ordered by creation time, newest first
    async fn list_posts(&self, offset: u64, limit: u64) -> StoreResult<Vec<Post>>;

    async fn count_posts(&self) -> StoreResult<u64>;

    /// Overwrite title and content and stamp `updated_at`. Returns `None` if
    /// the post no longer exists.
    async fn update_post(&self, id: Uuid, changes: PostChanges) -> StoreResult<Option<Post>>;

    /// Remove the post and all comments referencing it, atomically.
    /// Returns `false` if there was no such post.
    async fn delete_post_cascade(&self, id: Uuid) -> StoreResult<bool>;
}

/// Comment records, kept only as dependents of posts
#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn insert_comment(&self, comment: NewComment) -> StoreResult<Comment>;

    async fn comments_for_post(&self, post_id: Uuid) -> StoreResult<Vec<Comment>>;
}

/// Connectivity probe
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// `true` if the store answered a trivial query just now
    async fn ping(&self) -> bool;
}
