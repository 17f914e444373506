// Shared test helpers: stub DNS and WHOIS capabilities.
//
// This module provides common utilities used across multiple test files to
// reduce duplication. The stubs implement the same traits the production
// clients do, so the full check flow and HTTP surface run without a network.

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use domain_reputation::dns::RecordLookup;
use domain_reputation::error_handling::{DnsError, WhoisError};
use domain_reputation::whois::RawWhois;

/// Stub `RecordLookup` backed by in-memory answer tables.
///
/// Names absent from a table resolve as `DnsError::NotFound`, matching a real
/// NXDOMAIN. An optional per-call delay makes concurrency observable under a
/// paused tokio clock, and `calls` counts every lookup of any type.
#[derive(Default)]
pub struct StubLookup {
    pub a: HashMap<String, Vec<Ipv4Addr>>,
    pub mx: HashMap<String, Vec<String>>,
    pub ns: HashMap<String, Vec<String>>,
    /// When set, NS lookups fail hard with this message
    pub ns_failure: Option<String>,
    pub delay: Duration,
    pub calls: AtomicUsize,
}

impl StubLookup {
    #[allow(dead_code)] // Used by other test files
    pub fn lookup_calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    async fn tick(&self) {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl RecordLookup for StubLookup {
    async fn lookup_a(&self, name: &str) -> Result<Vec<Ipv4Addr>, DnsError> {
        self.tick().await;
        self.a
            .get(name)
            .cloned()
            .ok_or_else(|| DnsError::NotFound(name.to_string()))
    }

    async fn lookup_mx(&self, name: &str) -> Result<Vec<String>, DnsError> {
        self.tick().await;
        self.mx
            .get(name)
            .cloned()
            .ok_or_else(|| DnsError::NotFound(name.to_string()))
    }

    async fn lookup_ns(&self, name: &str) -> Result<Vec<String>, DnsError> {
        self.tick().await;
        if let Some(message) = &self.ns_failure {
            return Err(DnsError::Lookup {
                name: name.to_string(),
                message: message.clone(),
            });
        }
        self.ns
            .get(name)
            .cloned()
            .ok_or_else(|| DnsError::NotFound(name.to_string()))
    }
}

/// Stub `RawWhois` that returns a fixed response for every target.
#[derive(Default)]
pub struct StubWhois {
    pub raw: String,
    /// When set, every query fails with this message instead
    pub failure: Option<String>,
    pub delay: Duration,
    pub calls: AtomicUsize,
}

impl StubWhois {
    #[allow(dead_code)] // Used by other test files
    pub fn query_calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl RawWhois for StubWhois {
    async fn query(&self, _target: &str) -> Result<String, WhoisError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if let Some(message) = &self.failure {
            return Err(WhoisError::Io {
                server: "whois.test.invalid".to_string(),
                message: message.clone(),
            });
        }
        Ok(self.raw.clone())
    }
}

/// A WHOIS response carrying both a domain status and an owner field, so the
/// same stub serves the domain-status path and the IP-owner path.
#[allow(dead_code)] // Used by other test files
pub fn canned_whois_response() -> String {
    concat!(
        "Domain Name: EXAMPLE.COM\n",
        "Domain Status: clientTransferProhibited https://icann.org/epp#clientTransferProhibited\n",
        "Domain Status: clientDeleteProhibited https://icann.org/epp#clientDeleteProhibited\n",
        "OrgName: Example Org\n",
        "Country: US\n",
    )
    .to_string()
}
