//! Error handling and service statistics.
//!
//! This module provides:
//! - Error type definitions for request handling, DNS, and WHOIS transport
//! - Request statistics tracking surfaced by the `/status` endpoint
//!
//! The error taxonomy follows the propagation policy of the check flow:
//! only failures in the mandatory domain-record path become request-level
//! errors; all other sub-lookup failures degrade into sentinel values.

mod stats;
mod types;

// Re-export public API
pub use stats::ServiceStats;
pub use types::{CheckError, DnsError, InitializationError, WhoisError};
