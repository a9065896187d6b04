/**
 * Router Configuration
 *
 * Assembles the API routes with the cross-cutting layers:
 *
 * 1. **API Routes**: auth, posts and health under `/api`
 * 2. **Fallback**: JSON 404 for anything else
 * 3. **CORS**: the configured frontend origin, with credentials
 * 4. **Tracing**: one span per request
 */

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Workflows and collaborators shared by the handlers
/// * `frontend_url` - The single origin allowed by CORS
pub fn create_router(app_state: AppState, frontend_url: &str) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    let router = router.fallback(|| async { BackendError::not_found("Route not found") });

    router
        .with_state(app_state)
        .layer(cors_layer(frontend_url))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the browser frontend
///
/// Only a request whose `Origin` matches the frontend gets an
/// `Access-Control-Allow-Origin` header back. An origin that is not a valid
/// header value is logged and dropped, which leaves cross-origin requests
/// disallowed.
pub fn cors_layer(frontend_url: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true);

    match HeaderValue::from_str(frontend_url.trim_end_matches('/')) {
        Ok(origin) => cors.allow_origin(AllowOrigin::list([origin])),
        Err(e) => {
            tracing::warn!("Ignoring invalid FRONTEND_URL {:?}: {}", frontend_url, e);
            cors
        }
    }
}
