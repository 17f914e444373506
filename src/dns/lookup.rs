//! DNS record lookups (A, MX, NS).
//!
//! The `RecordLookup` trait is the seam between the check flow and the real
//! resolver, so the orchestrator and the blocklist prober can be tested with
//! stub lookups instead of live DNS.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::DnsError;

/// DNS resolution capability used by the check flow.
///
/// Implementations must never panic; failures are reported through
/// [`DnsError`], with [`DnsError::NotFound`] reserved for NXDOMAIN and
/// empty-answer responses.
#[async_trait]
pub trait RecordLookup: Send + Sync {
    /// Resolves A records for a name, in resolver order.
    async fn lookup_a(&self, name: &str) -> Result<Vec<Ipv4Addr>, DnsError>;

    /// Resolves MX records for a name, returning mail-exchange hostnames in
    /// resolver order (no re-sorting by priority).
    async fn lookup_mx(&self, name: &str) -> Result<Vec<String>, DnsError>;

    /// Resolves NS records for a name.
    async fn lookup_ns(&self, name: &str) -> Result<Vec<String>, DnsError>;
}

/// Production [`RecordLookup`] backed by a hickory `TokioAsyncResolver`.
#[derive(Clone)]
pub struct HickoryLookup {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryLookup {
    /// Wraps an already-configured resolver.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

/// Maps a resolver error onto the service error taxonomy.
///
/// NXDOMAIN and "no records of this type" both surface as `NotFound`; every
/// other failure (timeout, SERVFAIL, I/O) is a real lookup error.
fn classify(name: &str, err: &ResolveError) -> DnsError {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => DnsError::NotFound(name.to_string()),
        _ => DnsError::Lookup {
            name: name.to_string(),
            message: err.to_string(),
        },
    }
}

#[async_trait]
impl RecordLookup for HickoryLookup {
    async fn lookup_a(&self, name: &str) -> Result<Vec<Ipv4Addr>, DnsError> {
        let response = self
            .resolver
            .lookup_ip(name)
            .await
            .map_err(|e| classify(name, &e))?;

        Ok(response
            .iter()
            .filter_map(|ip| match ip {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })
            .collect())
    }

    async fn lookup_mx(&self, name: &str) -> Result<Vec<String>, DnsError> {
        let response = self
            .resolver
            .mx_lookup(name)
            .await
            .map_err(|e| classify(name, &e))?;

        Ok(response
            .iter()
            .map(|mx| mx.exchange().to_utf8().trim_end_matches('.').to_string())
            .collect())
    }

    async fn lookup_ns(&self, name: &str) -> Result<Vec<String>, DnsError> {
        let response = self
            .resolver
            .lookup(name, RecordType::NS)
            .await
            .map_err(|e| classify(name, &e))?;

        Ok(response
            .iter()
            .filter_map(|rdata| {
                if let RData::NS(ns) = rdata {
                    Some(ns.to_utf8().trim_end_matches('.').to_string())
                } else {
                    None
                }
            })
            .collect())
    }
}
