/**
 * Post Handlers
 *
 * HTTP surface of the post workflow:
 *
 * - `GET    /api/posts`       - paged listing (public)
 * - `GET    /api/posts/{id}`  - single post (public)
 * - `POST   /api/posts`       - create, 201 (authenticated)
 * - `PUT    /api/posts/{id}`  - update own post (authenticated)
 * - `DELETE /api/posts/{id}`  - delete own post and its comments (authenticated)
 *
 * Handlers only unpack the request and hand off to `PostService`; every
 * failure comes back as a `BackendError`.
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;

use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::middleware::AuthUser;
use crate::backend::posts::pagination::PageQuery;
use crate::backend::posts::service::{PostInput, PostService};
use crate::shared::models::{PostPage, PostView};

/// Confirmation body for deletions
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list_posts(
    State(posts): State<PostService>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PostPage>, BackendError> {
    Ok(Json(posts.list_posts(&query).await?))
}

pub async fn get_post(
    State(posts): State<PostService>,
    Path(id): Path<String>,
) -> Result<Json<PostView>, BackendError> {
    Ok(Json(posts.get_post(&id).await?))
}

pub async fn create_post(
    State(posts): State<PostService>,
    AuthUser(user): AuthUser,
    JsonBody(input): JsonBody<PostInput>,
) -> Result<(StatusCode, Json<PostView>), BackendError> {
    let post = posts.create_post(user.id, input).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn update_post(
    State(posts): State<PostService>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<PostInput>,
) -> Result<Json<PostView>, BackendError> {
    Ok(Json(posts.update_post(user.id, &id, input).await?))
}

pub async fn delete_post(
    State(posts): State<PostService>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    posts.delete_post(user.id, &id).await?;
    Ok(Json(MessageResponse {
        message: "Post removed successfully".to_string(),
    }))
}
