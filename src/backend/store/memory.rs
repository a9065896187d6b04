/**
 * In-Memory Store
 *
 * A single `RwLock` guards users, posts and comments together, which gives
 * the cascade delete its atomicity for free: the write lock is held across
 * both removals, so no reader can observe the comments gone while the post
 * remains (or the reverse).
 *
 * Used by the test suites and by `STORAGE=memory` for running the server
 * without a database. Nothing is persisted.
 */

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, User};
use crate::backend::posts::comments::{Comment, NewComment};
use crate::backend::posts::db::{NewPost, Post, PostChanges};
use crate::backend::store::{
    CommentStore, HealthCheck, PostStore, StoreError, StoreResult, UserStore,
};

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    /// Posts with their insertion sequence, used to break timestamp ties
    posts: HashMap<Uuid, (u64, Post)>,
    comments: HashMap<Uuid, Comment>,
    next_seq: u64,
}

/// Store kept entirely in process memory
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a user record directly, bypassing every workflow
    ///
    /// Users are never deleted through the API. This exists so callers can
    /// simulate an account disappearing underneath a live session.
    pub async fn remove_user(&self, id: Uuid) -> bool {
        self.tables.write().await.users.remove(&id).is_some()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate {
                field: "email".to_string(),
            });
        }

        let stored = User {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            created_at: Utc::now(),
        };
        tables.users.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_users_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<User>> {
        let tables = self.tables.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| tables.users.get(id).cloned())
            .collect())
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn insert_post(&self, post: NewPost) -> StoreResult<Post> {
        let mut tables = self.tables.write().await;

        if !tables.users.contains_key(&post.author_id) {
            return Err(StoreError::MissingReference {
                field: "author_id".to_string(),
            });
        }

        let now = Utc::now();
        let stored = Post {
            id: Uuid::new_v4(),
            title: post.title,
            content: post.content,
            author_id: post.author_id,
            created_at: now,
            updated_at: now,
        };
        let seq = tables.next_seq;
        tables.next_seq += 1;
        tables.posts.insert(stored.id, (seq, stored.clone()));
        Ok(stored)
    }

    async fn find_post(&self, id: Uuid) -> StoreResult<Option<Post>> {
        let tables = self.tables.read().await;
        Ok(tables.posts.get(&id).map(|(_, post)| post.clone()))
    }

    async fn list_posts(&self, offset: u64, limit: u64) -> StoreResult<Vec<Post>> {
        let tables = self.tables.read().await;

        let mut posts: Vec<&(u64, Post)> = tables.posts.values().collect();
        posts.sort_by(|(seq_a, a), (seq_b, b)| {
            b.created_at.cmp(&a.created_at).then(seq_b.cmp(seq_a))
        });

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(posts
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|(_, post)| post.clone())
            .collect())
    }

    async fn count_posts(&self) -> StoreResult<u64> {
        Ok(self.tables.read().await.posts.len() as u64)
    }

    async fn update_post(&self, id: Uuid, changes: PostChanges) -> StoreResult<Option<Post>> {
        let mut tables = self.tables.write().await;

        let Some((_, post)) = tables.posts.get_mut(&id) else {
            return Ok(None);
        };
        post.title = changes.title;
        post.content = changes.content;
        post.updated_at = Utc::now();
        Ok(Some(post.clone()))
    }

    async fn delete_post_cascade(&self, id: Uuid) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;

        if tables.posts.remove(&id).is_none() {
            return Ok(false);
        }
        tables.comments.retain(|_, comment| comment.post_id != id);
        Ok(true)
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn insert_comment(&self, comment: NewComment) -> StoreResult<Comment> {
        let mut tables = self.tables.write().await;

        if !tables.posts.contains_key(&comment.post_id) {
            return Err(StoreError::MissingReference {
                field: "post_id".to_string(),
            });
        }

        let stored = Comment {
            id: Uuid::new_v4(),
            post_id: comment.post_id,
            author_id: comment.author_id,
            content: comment.content,
            created_at: Utc::now(),
        };
        tables.comments.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn comments_for_post(&self, post_id: Uuid) -> StoreResult<Vec<Comment>> {
        let tables = self.tables.read().await;
        let mut comments: Vec<Comment> = tables
            .comments
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by_key(|c| c.created_at);
        Ok(comments)
    }
}

#[async_trait]
impl HealthCheck for MemoryStore {
    async fn ping(&self) -> bool {
        true
    }
}
