/**
 * Comment Records
 *
 * Comments are dependents of posts. Nothing in the HTTP surface creates or
 * lists them; they exist so a post deletion has something to cascade to.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
}

/// Save a comment
pub async fn create_comment(pool: &PgPool, new_comment: NewComment) -> Result<Comment, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (id, post_id, author_id, content, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, post_id, author_id, content, created_at
        "#,
    )
    .bind(id)
    .bind(new_comment.post_id)
    .bind(new_comment.author_id)
    .bind(&new_comment.content)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Load all comments for a post, oldest first
pub async fn get_comments_for_post(pool: &PgPool, post_id: Uuid) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, post_id, author_id, content, created_at
        FROM comments
        WHERE post_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}
