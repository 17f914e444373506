//! DNS resolver initialization.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_TIMEOUT_SECS;

/// Initializes the DNS resolver used for record lookups and blocklist probes.
///
/// Uses the default resolver configuration with tightened timeouts so a slow
/// or unresponsive DNS server fails a lookup rather than stalling a request.
/// `ndots = 0` prevents search-domain appending, which would corrupt
/// blocklist queries like `example.com.multi.surbl.org`.
pub fn init_resolver() -> Arc<TokioAsyncResolver> {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = 2; // Fail faster than the default
    opts.ndots = 0;

    Arc::new(TokioAsyncResolver::tokio(ResolverConfig::default(), opts))
}
