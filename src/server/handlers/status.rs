//! Handler for the `/status` endpoint.

use axum::extract::State;
use axum::Json;

use crate::server::types::{AppState, StatusResponse};

/// Handles `GET /status`, reporting request counters and uptime.
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        checks_total: state.stats.checks_total(),
        checks_ok: state.stats.checks_ok(),
        checks_failed: state.stats.checks_failed(),
        invalid_requests: state.stats.invalid_requests(),
        uptime_seconds: state.started.elapsed().as_secs_f64(),
    })
}
