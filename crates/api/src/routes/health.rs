use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    store: &'static str,
    store_healthy: bool,
    generator: &'static str,
}

/// GET /health
///
/// Reports `degraded` when the store is unreachable.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = state.pipeline.store_healthy().await;

    let status = if store_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store: state.pipeline.store_backend(),
        store_healthy,
        generator: state.pipeline.generator_name(),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
