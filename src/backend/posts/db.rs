/**
 * Post Model and Database Operations
 *
 * This module provides the stored post record and the PostgreSQL queries
 * behind `PgStore`'s `PostStore` implementation.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// A stored post
///
/// `author_id` is set once at creation and never rewritten; no query in this
/// module updates it.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
}

/// The mutable part of a post
#[derive(Debug, Clone)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
}

/// Save a new post
///
/// # Returns
/// The stored post, with `created_at` and `updated_at` both set to now
pub async fn create_post(pool: &PgPool, new_post: NewPost) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, title, content, author_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $5)
        RETURNING id, title, content, author_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&new_post.title)
    .bind(&new_post.content)
    .bind(new_post.author_id)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Get post by ID
pub async fn get_post_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author_id, created_at, updated_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Load one page of posts, newest first
pub async fn list_posts(pool: &PgPool, offset: i64, limit: i64) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author_id, created_at, updated_at
        FROM posts
        ORDER BY created_at DESC, id DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

/// Count all posts
pub async fn count_posts(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await
}

/// Overwrite a post's title and content
///
/// # Returns
/// The updated post, or `None` if it does not exist
pub async fn update_post(
    pool: &PgPool,
    id: Uuid,
    changes: PostChanges,
) -> Result<Option<Post>, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = $1, content = $2, updated_at = $3
        WHERE id = $4
        RETURNING id, title, content, author_id, created_at, updated_at
        "#,
    )
    .bind(&changes.title)
    .bind(&changes.content)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a post and every comment that references it
///
/// Both deletes run in one transaction. If the post does not exist the
/// transaction is rolled back and `false` is returned.
pub async fn delete_post_with_comments(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let comments = sqlx::query("DELETE FROM comments WHERE post_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let posts = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if posts.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(false);
    }

    tx.commit().await?;
    tracing::debug!(
        "Deleted post {} and {} dependent comments",
        id,
        comments.rows_affected()
    );
    Ok(true)
}
