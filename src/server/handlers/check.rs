//! Handler for the `/check` endpoint.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{info, warn};

use crate::check::run_check;
use crate::error_handling::CheckError;
use crate::server::types::{AppState, CheckParams};

/// Handles `GET /check?domain=<name>`.
///
/// Runs the full reputation check and returns the consolidated report as
/// JSON. A missing or blank `domain` parameter yields 400; any required
/// lookup failure yields 500 with the upstream error message.
pub async fn check_handler(
    State(state): State<AppState>,
    Query(params): Query<CheckParams>,
) -> Response {
    let domain = params.domain.unwrap_or_default();

    match run_check(
        state.records.as_ref(),
        state.whois.as_ref(),
        &state.config,
        &domain,
    )
    .await
    {
        Ok(report) => {
            state.stats.record_ok();
            info!(
                "check ok for {}: surbl={} dbl={}",
                report.domain, report.blacklist.surbl, report.blacklist.dbl
            );
            Json(report).into_response()
        }
        Err(CheckError::InvalidRequest) => {
            state.stats.record_invalid();
            CheckError::InvalidRequest.into_response()
        }
        Err(e) => {
            state.stats.record_failed();
            warn!("check failed for {}: {}", domain.trim(), e);
            e.into_response()
        }
    }
}
