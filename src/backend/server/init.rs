/**
 * Server Initialization
 *
 * Builds the store selected by configuration, wires the application state
 * and hands it to the router.
 */

use axum::Router;

use crate::backend::auth::sessions::TokenService;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ConfigError, ServerConfig, StorageBackend};
use crate::backend::server::state::AppState;
use crate::backend::store::{MemoryStore, PgStore};

/// Build the application state for the configured storage backend
pub async fn build_state(config: &ServerConfig) -> Result<AppState, ConfigError> {
    let tokens = TokenService::new(&config.jwt_secret);

    let state = match &config.storage {
        StorageBackend::Postgres { database_url } => {
            let pool = load_database(database_url).await?;
            AppState::new(PgStore::new(pool), tokens, config.bcrypt_cost)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            AppState::new(MemoryStore::new(), tokens, config.bcrypt_cost)
        }
    };

    Ok(state)
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails only when the configuration itself is unusable. An unreachable
/// database leaves the server running in degraded mode.
pub async fn create_app(config: &ServerConfig) -> Result<Router, ConfigError> {
    tracing::info!("Initializing blog backend");

    let state = build_state(config).await?;
    let app = create_router(state, &config.frontend_url);

    tracing::info!("Router configured");
    Ok(app)
}
