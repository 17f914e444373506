//! Application initialization and resource setup.
//!
//! Provides functions to initialize the shared resources the service needs
//! at startup: the logger and the DNS resolver. Everything is created once
//! and passed into the server as immutable shared state.

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;
