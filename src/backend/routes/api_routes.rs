/**
 * API Routes
 *
 * # Authentication
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 * - `GET /api/auth/me` - Current user (guarded)
 *
 * # Posts
 * - `GET /api/posts` - Paged listing
 * - `GET /api/posts/{id}` - Single post
 * - `POST /api/posts` - Create (guarded)
 * - `PUT /api/posts/{id}` - Update own post (guarded)
 * - `DELETE /api/posts/{id}` - Delete own post (guarded)
 *
 * # Health
 * - `GET /api/health` - Liveness and database status
 *
 * Guarded methods carry the session guard as a route layer on that method
 * only, so a public GET and a guarded POST can share a path.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::health::health_check;
use crate::backend::middleware::session_guard;
use crate::backend::posts::handlers::{create_post, delete_post, get_post, list_posts, update_post};
use crate::backend::server::state::AppState;

/// Add the `/api` routes to a router
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let guard = from_fn_with_state(app_state.guard.clone(), session_guard);

    router
        // Authentication endpoints
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(get_me).route_layer(guard.clone()))
        // Post endpoints
        .route(
            "/api/posts",
            get(list_posts).merge(post(create_post).route_layer(guard.clone())),
        )
        .route(
            "/api/posts/{id}",
            get(get_post).merge(
                axum::routing::put(update_post)
                    .delete(delete_post)
                    .route_layer(guard),
            ),
        )
        .route("/api/health", get(health_check))
}
