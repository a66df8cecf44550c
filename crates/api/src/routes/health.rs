use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
}

/// GET /health -- liveness probe. Always `ok`: the service holds no state
/// that can degrade between requests.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Mount health check routes at the root level.
///
/// The hosting infrastructure probes `/kaithhealthcheck` and, because of a
/// typo in its prober, `/kaithheathcheck`. Both must answer literally, so
/// the misspelled route stays.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/kaithhealthcheck", get(health_check))
        .route("/kaithheathcheck", get(health_check))
}
