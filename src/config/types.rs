//! Configuration types and CLI options.
//!
//! This module defines the service configuration struct and the enums used
//! for command-line argument parsing.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DBL_ZONE, DEFAULT_PORT, MAX_WHOIS_RESPONSE_BYTES, SURBL_ZONE, WHOIS_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Parsed from command-line arguments; the listening port can also come from
/// the `PORT` environment variable. Configuration is built once at startup
/// and passed into the server as an immutable value.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "domain_reputation",
    about = "Domain reputation lookup service (DNS, WHOIS, DNS blocklists)"
)]
pub struct Config {
    /// HTTP listening port
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Per-lookup WHOIS timeout in seconds
    #[arg(long, default_value_t = WHOIS_TIMEOUT_SECS)]
    pub whois_timeout_seconds: u64,

    /// Maximum raw WHOIS response size in bytes
    #[arg(long, default_value_t = MAX_WHOIS_RESPONSE_BYTES)]
    pub whois_max_response_bytes: usize,

    /// SURBL blocklist zone
    #[arg(long, default_value = SURBL_ZONE)]
    pub surbl_zone: String,

    /// Spamhaus DBL blocklist zone
    #[arg(long, default_value = DBL_ZONE)]
    pub dbl_zone: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            whois_timeout_seconds: WHOIS_TIMEOUT_SECS,
            whois_max_response_bytes: MAX_WHOIS_RESPONSE_BYTES,
            surbl_zone: SURBL_ZONE.to_string(),
            dbl_zone: DBL_ZONE.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// A configuration validation failure, identifying the offending field.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Name of the field that failed validation
    pub field: String,
    /// Human-readable description of the problem
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl Config {
    /// Validates the configuration, returning a field-level error for the
    /// first problem found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError {
                field: "port".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.whois_timeout_seconds == 0 {
            return Err(ValidationError {
                field: "whois_timeout_seconds".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.whois_max_response_bytes < 1024 {
            return Err(ValidationError {
                field: "whois_max_response_bytes".to_string(),
                message: "must be at least 1024 bytes".to_string(),
            });
        }
        if self.surbl_zone.trim().is_empty() {
            return Err(ValidationError {
                field: "surbl_zone".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.dbl_zone.trim().is_empty() {
            return Err(ValidationError {
                field: "dbl_zone".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
