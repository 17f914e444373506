//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the
//! application, including timeouts, size limits, and blocklist zones.

/// Default HTTP listening port (overridable via `--port` or the `PORT` env var)
pub const DEFAULT_PORT: u16 = 3000;

// Network operation timeouts
/// DNS query timeout in seconds
/// Most DNS queries complete in <1s; 5s provides buffer while failing fast
/// on unresponsive resolvers
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// TCP connection timeout for WHOIS servers in seconds
pub const WHOIS_CONNECT_TIMEOUT_SECS: u64 = 5;
/// Overall WHOIS query timeout in seconds (connect + write + read)
/// WHOIS servers can be slow; 10s bounds the worst case without stalling
/// a request indefinitely
pub const WHOIS_TIMEOUT_SECS: u64 = 10;

// Response size limits
/// Maximum raw WHOIS response size in bytes (256 KiB)
/// Responses larger than this are treated as a transport failure to prevent
/// unbounded memory growth from a misbehaving WHOIS server
pub const MAX_WHOIS_RESPONSE_BYTES: usize = 256 * 1024;

// DNS-based blocklist zones
/// SURBL combined list zone
pub const SURBL_ZONE: &str = "multi.surbl.org";
/// Spamhaus Domain Block List zone
pub const DBL_ZONE: &str = "dbl.spamhaus.org";

/// Standard WHOIS port
pub const WHOIS_PORT: u16 = 43;
