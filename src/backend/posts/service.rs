/**
 * Post Workflow
 *
 * List, read, create, update and delete posts. Reads are public; every
 * mutation takes the requester's verified identity and refuses to touch a
 * post whose author is someone else.
 *
 * # Ordering of checks on mutation
 *
 * 1. The path id must parse (`InvalidId`)
 * 2. The post must exist (`NotFound`)
 * 3. The requester must be the author (`Forbidden`)
 * 4. Only then is the payload validated (`Validation`)
 *
 * A non-author therefore always gets `Forbidden`, whatever they sent.
 */

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::extract::null_as_empty;
use crate::backend::posts::db::{NewPost, Post, PostChanges};
use crate::backend::posts::pagination::{PageQuery, PageRequest};
use crate::backend::store::{PostStore, StoreError, UserStore};
use crate::shared::models::{AuthorSummary, PostPage, PostView};
use crate::shared::validation::validate_post;

/// Title and body of a post, as submitted
///
/// Missing or `null` fields deserialize as empty strings so they are reported by
/// validation rather than rejected by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

/// Parse a post id from a path segment
pub fn parse_post_id(raw: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| BackendError::InvalidId)
}

#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostStore>,
    users: Arc<dyn UserStore>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostStore>, users: Arc<dyn UserStore>) -> Self {
        Self { posts, users }
    }

    /// One page of posts, newest first, authors expanded
    pub async fn list_posts(&self, query: &PageQuery) -> Result<PostPage, BackendError> {
        let request = PageRequest::from_query(query);

        let posts = self
            .posts
            .list_posts(request.offset(), request.limit)
            .await?;
        let total = self.posts.count_posts().await?;

        Ok(PostPage {
            posts: self.expand(posts).await?,
            total,
            page: request.page,
            pages: request.pages(total),
            limit: request.limit,
        })
    }

    pub async fn get_post(&self, raw_id: &str) -> Result<PostView, BackendError> {
        let id = parse_post_id(raw_id)?;
        let post = self.load(id).await?;
        self.expand_one(post).await
    }

    pub async fn create_post(
        &self,
        author_id: Uuid,
        input: PostInput,
    ) -> Result<PostView, BackendError> {
        validate_post(&input.title, &input.content)?;

        if self.users.find_user_by_id(author_id).await?.is_none() {
            tracing::warn!("Post creation by unknown user {}", author_id);
            return Err(BackendError::UserNotFound);
        }

        let post = self
            .posts
            .insert_post(NewPost {
                title: input.title.trim().to_string(),
                content: input.content,
                author_id,
            })
            .await
            .map_err(|e| match e {
                StoreError::MissingReference { .. } => BackendError::UserNotFound,
                other => other.into(),
            })?;

        tracing::info!("Post {} created by {}", post.id, author_id);
        self.expand_one(post).await
    }

    pub async fn update_post(
        &self,
        requester: Uuid,
        raw_id: &str,
        input: PostInput,
    ) -> Result<PostView, BackendError> {
        let id = parse_post_id(raw_id)?;
        let post = self.load(id).await?;
        ensure_author(&post, requester, "Not authorized to update this post")?;

        validate_post(&input.title, &input.content)?;

        let updated = self
            .posts
            .update_post(
                id,
                PostChanges {
                    title: input.title.trim().to_string(),
                    content: input.content,
                },
            )
            .await?
            .ok_or_else(|| BackendError::not_found("Post not found"))?;

        tracing::info!("Post {} updated by {}", id, requester);
        self.expand_one(updated).await
    }

    /// Delete a post and its comments
    pub async fn delete_post(&self, requester: Uuid, raw_id: &str) -> Result<(), BackendError> {
        let id = parse_post_id(raw_id)?;
        let post = self.load(id).await?;
        ensure_author(&post, requester, "Not authorized to delete this post")?;

        if !self.posts.delete_post_cascade(id).await? {
            return Err(BackendError::not_found("Post not found"));
        }

        tracing::info!("Post {} deleted by {}", id, requester);
        Ok(())
    }

    async fn load(&self, id: Uuid) -> Result<Post, BackendError> {
        self.posts
            .find_post(id)
            .await?
            .ok_or_else(|| BackendError::not_found("Post not found"))
    }

    async fn expand_one(&self, post: Post) -> Result<PostView, BackendError> {
        let mut views = self.expand(vec![post]).await?;
        views
            .pop()
            .ok_or_else(|| BackendError::internal("Author expansion dropped a post"))
    }

    /// Replace author ids with author summaries, one store round trip
    async fn expand(&self, posts: Vec<Post>) -> Result<Vec<PostView>, BackendError> {
        let mut author_ids: Vec<Uuid> = posts.iter().map(|p| p.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let authors: HashMap<Uuid, AuthorSummary> = self
            .users
            .find_users_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, AuthorSummary::from(&user.to_public())))
            .collect();

        Ok(posts
            .into_iter()
            .map(|post| PostView {
                author: authors.get(&post.author_id).cloned(),
                id: post.id,
                title: post.title,
                content: post.content,
                created_at: post.created_at,
                updated_at: post.updated_at,
            })
            .collect())
    }
}

fn ensure_author(post: &Post, requester: Uuid, message: &str) -> Result<(), BackendError> {
    if post.author_id != requester {
        tracing::warn!(
            "User {} attempted to modify post {} owned by {}",
            requester,
            post.id,
            post.author_id
        );
        return Err(BackendError::forbidden(message));
    }
    Ok(())
}
