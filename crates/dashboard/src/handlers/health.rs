//! Health check endpoints for the Quill dashboard.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::db::pool::health_check as db_health_check;
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Health status ("ok" or "unhealthy")
    pub status: String,
}

/// Detailed health check response for the API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiHealthResponse {
    /// Overall health status
    pub status: String,

    /// Database connectivity status
    pub database: String,

    /// Key-value store connectivity status
    pub kv_store: String,

    /// Key-value backend in use ("redis" or "memory")
    pub kv_backend: String,

    /// Server uptime in seconds
    pub uptime_seconds: u64,

    /// Server version
    pub version: String,
}

/// Basic health check endpoint.
///
/// `GET /health`
///
/// Returns quickly without touching any backend, so it is suitable for
/// load balancer health checks.
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}

/// Detailed API health check endpoint.
///
/// `GET /api/health`
///
/// - `200 OK` when the database and key-value store both answer
/// - `503 Service Unavailable` otherwise
pub async fn api_health(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiHealthResponse>) {
    let (db_healthy, kv_healthy) =
        tokio::join!(db_health_check(&state.db), state.kv.ping());
    let healthy = db_healthy && kv_healthy;

    let connectivity = |up: bool| if up { "connected" } else { "disconnected" }.to_string();

    let response = ApiHealthResponse {
        status: if healthy { "ok" } else { "unhealthy" }.to_string(),
        database: connectivity(db_healthy),
        kv_store: connectivity(kv_healthy),
        kv_backend: state.kv.backend().to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
