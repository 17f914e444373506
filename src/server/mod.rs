//! The HTTP surface of the service.
//!
//! Exposes two endpoints:
//! - `GET /check?domain=<name>` runs a reputation check and returns the
//!   consolidated report as JSON
//! - `GET /status` reports request counters and uptime
//!
//! The router holds a single shared [`AppState`]; handlers never block each
//! other and a slow check on one connection does not stall another.

mod handlers;
mod types;

pub use types::{AppState, CheckParams, ErrorBody, StatusResponse};

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use log::info;

use handlers::{check_handler, status_handler};

/// Builds the application router with all routes wired to the shared state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/check", get(check_handler))
        .route("/status", get(status_handler))
        .with_state(state)
}

/// Binds the listener and serves requests until the process exits.
pub async fn serve(state: AppState) -> Result<(), anyhow::Error> {
    let port = state.config.port;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind to port {}", port))?;

    info!("Listening on http://0.0.0.0:{}/check", port);

    axum::serve(listener, app)
        .await
        .context("HTTP server terminated unexpectedly")?;

    Ok(())
}
