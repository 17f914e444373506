//! Service statistics tracking.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Atomic counters for requests served by the check endpoint.
///
/// Shared across all request tasks; read by the `/status` endpoint.
#[derive(Debug, Default)]
pub struct ServiceStats {
    checks_total: AtomicUsize,
    checks_ok: AtomicUsize,
    checks_failed: AtomicUsize,
    invalid_requests: AtomicUsize,
}

impl ServiceStats {
    /// Creates a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a check request that produced a full report.
    pub fn record_ok(&self) {
        self.checks_total.fetch_add(1, Ordering::SeqCst);
        self.checks_ok.fetch_add(1, Ordering::SeqCst);
    }

    /// Records a check request that failed on a required upstream lookup.
    pub fn record_failed(&self) {
        self.checks_total.fetch_add(1, Ordering::SeqCst);
        self.checks_failed.fetch_add(1, Ordering::SeqCst);
    }

    /// Records a rejected request (missing/blank domain parameter).
    pub fn record_invalid(&self) {
        self.checks_total.fetch_add(1, Ordering::SeqCst);
        self.invalid_requests.fetch_add(1, Ordering::SeqCst);
    }

    /// Total check requests received.
    pub fn checks_total(&self) -> usize {
        self.checks_total.load(Ordering::SeqCst)
    }

    /// Check requests that produced a full report.
    pub fn checks_ok(&self) -> usize {
        self.checks_ok.load(Ordering::SeqCst)
    }

    /// Check requests that failed on a required upstream lookup.
    pub fn checks_failed(&self) -> usize {
        self.checks_failed.load(Ordering::SeqCst)
    }

    /// Requests rejected before any lookup began.
    pub fn invalid_requests(&self) -> usize {
        self.invalid_requests.load(Ordering::SeqCst)
    }
}
