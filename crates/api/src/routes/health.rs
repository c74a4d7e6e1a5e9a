use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Service banner payload for `GET /`.
#[derive(Serialize)]
pub struct RootResponse {
    /// Human-readable service name.
    pub message: String,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Time the check ran, RFC 3339 in UTC.
    pub timestamp: String,
    /// Whether the artist store answered a ping.
    pub store_healthy: bool,
}

/// GET / -- identifies the service.
async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("{} API", state.config.app_name),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health -- returns service and store health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = match state.store.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, backend = state.store.backend(), "Store health check failed");
            false
        }
    };

    let status = if store_healthy { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status,
        timestamp: chrono::Utc::now().to_rfc3339(),
        store_healthy,
    })
}

/// Mount the banner and health check routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
