//! GET /api/health

use std::sync::Arc;

use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::backend::store::HealthCheck;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

/// Liveness plus live database connectivity
///
/// Always 200; a down database is reported in the body so the server stays
/// observable in degraded mode.
pub async fn health_check(State(health): State<Arc<dyn HealthCheck>>) -> Json<HealthResponse> {
    let database = if health.ping().await {
        "Connected"
    } else {
        tracing::warn!("Health check: database unreachable");
        "Disconnected"
    };

    Json(HealthResponse {
        status: "OK",
        database,
    })
}
