//! HTTP server data structures and shared state.

use std::sync::Arc;
use std::time::Instant;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::dns::RecordLookup;
use crate::error_handling::{CheckError, ServiceStats};
use crate::whois::RawWhois;

/// Shared state for the HTTP server.
///
/// Everything here is immutable or internally synchronized; nothing is
/// shared mutably across requests.
#[derive(Clone)]
pub struct AppState {
    /// DNS lookup capability (shared with the blocklist prober)
    pub records: Arc<dyn RecordLookup>,
    /// Raw WHOIS capability
    pub whois: Arc<dyn RawWhois>,
    /// Service configuration, fixed at startup
    pub config: Arc<Config>,
    /// Request counters for `/status`
    pub stats: Arc<ServiceStats>,
    /// Server start time, for uptime reporting
    pub started: Instant,
}

impl AppState {
    /// Builds the shared state from its capabilities and configuration.
    pub fn new(records: Arc<dyn RecordLookup>, whois: Arc<dyn RawWhois>, config: Config) -> Self {
        Self {
            records,
            whois,
            config: Arc::new(config),
            stats: Arc::new(ServiceStats::new()),
            started: Instant::now(),
        }
    }
}

/// Query parameters for `GET /check`.
#[derive(Debug, Deserialize)]
pub struct CheckParams {
    /// The domain to check; absent and blank are both rejected
    pub domain: Option<String>,
}

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable failure description
    pub error: String,
}

/// JSON response for the `/status` endpoint.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub checks_total: usize,
    pub checks_ok: usize,
    pub checks_failed: usize,
    pub invalid_requests: usize,
    pub uptime_seconds: f64,
}

impl IntoResponse for CheckError {
    fn into_response(self) -> Response {
        let status = match self {
            CheckError::InvalidRequest => StatusCode::BAD_REQUEST,
            CheckError::UpstreamLookupFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
