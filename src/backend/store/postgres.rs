/**
 * PostgreSQL Store
 *
 * `PgStore` implements the store traits on top of the query functions in
 * `auth::users`, `posts::db` and `posts::comments`. Its only job beyond
 * delegation is translating constraint violations into `StoreError`
 * variants the workflows can act on.
 */

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::users::{self, NewUser, User};
use crate::backend::posts::comments::{self, Comment, NewComment};
use crate::backend::posts::db::{self, NewPost, Post, PostChanges};
use crate::backend::store::{
    CommentStore, HealthCheck, PostStore, StoreError, StoreResult, UserStore,
};

/// Store backed by a PostgreSQL connection pool
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Translate constraint violations into store errors
///
/// Constraint names follow PostgreSQL's defaults (`users_email_key`,
/// `posts_author_id_fkey`), so the offending column is the middle segment.
fn map_write_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        let field = db_err
            .constraint()
            .map(constraint_column)
            .unwrap_or_else(|| "unknown".to_string());

        if db_err.is_unique_violation() {
            return StoreError::Duplicate { field };
        }
        if db_err.is_foreign_key_violation() {
            return StoreError::MissingReference { field };
        }
    }
    StoreError::Database(err)
}

fn constraint_column(constraint: &str) -> String {
    let trimmed = constraint
        .strip_suffix("_key")
        .or_else(|| constraint.strip_suffix("_fkey"))
        .unwrap_or(constraint);
    match trimmed.split_once('_') {
        Some((_table, column)) => column.to_string(),
        None => trimmed.to_string(),
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        users::create_user(&self.pool, user)
            .await
            .map_err(map_write_error)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(users::get_user_by_email(&self.pool, email).await?)
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(users::get_user_by_id(&self.pool, id).await?)
    }

    async fn find_users_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(users::get_users_by_ids(&self.pool, ids).await?)
    }
}

#[async_trait]
impl PostStore for PgStore {
    async fn insert_post(&self, post: NewPost) -> StoreResult<Post> {
        db::create_post(&self.pool, post)
            .await
            .map_err(map_write_error)
    }

    async fn find_post(&self, id: Uuid) -> StoreResult<Option<Post>> {
        Ok(db::get_post_by_id(&self.pool, id).await?)
    }

    async fn list_posts(&self, offset: u64, limit: u64) -> StoreResult<Vec<Post>> {
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        Ok(db::list_posts(&self.pool, offset, limit).await?)
    }

    async fn count_posts(&self) -> StoreResult<u64> {
        let count = db::count_posts(&self.pool).await?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn update_post(&self, id: Uuid, changes: PostChanges) -> StoreResult<Option<Post>> {
        db::update_post(&self.pool, id, changes)
            .await
            .map_err(map_write_error)
    }

    async fn delete_post_cascade(&self, id: Uuid) -> StoreResult<bool> {
        Ok(db::delete_post_with_comments(&self.pool, id).await?)
    }
}

#[async_trait]
impl CommentStore for PgStore {
    async fn insert_comment(&self, comment: NewComment) -> StoreResult<Comment> {
        comments::create_comment(&self.pool, comment)
            .await
            .map_err(map_write_error)
    }

    async fn comments_for_post(&self, post_id: Uuid) -> StoreResult<Vec<Comment>> {
        Ok(comments::get_comments_for_post(&self.pool, post_id).await?)
    }
}

#[async_trait]
impl HealthCheck for PgStore {
    async fn ping(&self) -> bool {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Database ping failed: {}", e);
                false
            }
        }
    }
}
