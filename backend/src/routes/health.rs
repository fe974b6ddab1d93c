//! Health check endpoints
//!
//! - /health: process is up
//! - /health/ready: database reachable, 503 otherwise
//! - /health/live: always OK while the server runs

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::warn;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<&'static str>,
}

impl HealthResponse {
    fn new(status: &'static str) -> Self {
        Self {
            status,
            version: VERSION,
            database: None,
        }
    }
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy"))
}

/// Readiness probe
///
/// The failure reason is logged, not returned.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    match db::health_check(state.db()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                database: Some("healthy"),
                ..HealthResponse::new("ready")
            }),
        ),
        Err(e) => {
            warn!("readiness check failed: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    database: Some("unhealthy"),
                    ..HealthResponse::new("not_ready")
                }),
            )
        }
    }
}

/// Liveness probe
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("alive"))
}
