//! Error type definitions.
//!
//! This module defines all error types used throughout the service.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    #[allow(dead_code)] // Reserved for resolver configs that can fail
    DnsResolverError(String),
}

/// Request-level failures for a reputation check.
///
/// Only failures in the mandatory domain-record path become request-level
/// errors; blocklist and IP-owner failures degrade into sentinel values inside
/// a successful report instead.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The domain parameter was missing or blank. Surfaced as HTTP 400.
    #[error("Missing domain parameter.")]
    InvalidRequest,

    /// A required upstream lookup (A, MX, NS, or WHOIS-domain) failed.
    /// Surfaced as HTTP 500 with the underlying error text.
    #[error("{0}")]
    UpstreamLookupFailed(String),
}

/// DNS lookup failures, distinguishing "no records" from real errors.
#[derive(Error, Debug)]
pub enum DnsError {
    /// The name does not exist or has no records of the requested type.
    #[error("no records found for {0}")]
    NotFound(String),

    /// Any other resolution failure (timeout, SERVFAIL, network error).
    #[error("DNS lookup failed for {name}: {message}")]
    Lookup {
        /// The name that was queried
        name: String,
        /// Resolver error text
        message: String,
    },
}

/// Raw WHOIS transport failures.
#[derive(Error, Debug)]
pub enum WhoisError {
    /// TCP connection to the WHOIS server failed.
    #[error("WHOIS connection to {server} failed: {message}")]
    Connect {
        /// WHOIS server host
        server: String,
        /// Underlying I/O error text
        message: String,
    },

    /// The query did not complete within the configured deadline.
    #[error("WHOIS query to {server} timed out")]
    Timeout {
        /// WHOIS server host
        server: String,
    },

    /// The server sent more data than the configured ceiling.
    #[error("WHOIS response from {server} exceeded {limit} bytes")]
    ResponseTooLarge {
        /// WHOIS server host
        server: String,
        /// Configured size ceiling in bytes
        limit: usize,
    },

    /// The server closed the connection without sending anything useful.
    #[error("WHOIS response from {server} was empty")]
    EmptyResponse {
        /// WHOIS server host
        server: String,
    },

    /// Read or write failure mid-query.
    #[error("WHOIS query to {server} failed: {message}")]
    Io {
        /// WHOIS server host
        server: String,
        /// Underlying I/O error text
        message: String,
    },
}
