//! DNS-based blocklist probes (SURBL, Spamhaus DBL).
//!
//! A domain is probed by resolving `<normalized-domain>.<zone>`: blocklist
//! zones answer with an address in `127.0.0.0/8` when the domain is listed
//! and NXDOMAIN when it is not. Sub-codes within 127/8 carry per-list reason
//! detail; this service collapses them all to "listed".

use crate::dns::RecordLookup;
use crate::error_handling::DnsError;

/// Tri-state outcome of a single blocklist probe.
///
/// `CheckFailed` is kept distinct from `NotListed` internally; the response
/// boundary decides whether to collapse it (it currently does, matching the
/// no-retry, never-raise probe contract).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The zone returned at least one 127/8 address.
    Listed,
    /// The zone returned NXDOMAIN, or answered without a 127/8 address.
    NotListed,
    /// The lookup failed for any other reason (timeout, SERVFAIL, ...).
    CheckFailed,
}

impl ProbeOutcome {
    /// Collapses the outcome to the boolean reported over the wire.
    ///
    /// `CheckFailed` reads as "not listed": a transient resolver failure is
    /// indistinguishable from a clean domain at the API boundary.
    pub fn is_listed(self) -> bool {
        matches!(self, ProbeOutcome::Listed)
    }
}

/// Normalizes user input down to a bare hostname for blocklist queries.
///
/// Lower-cases, strips a leading `http://`/`https://` scheme and a leading
/// `www.`, and truncates at the first `/`. Applied identically for every
/// zone so both probes always query the same name.
pub fn normalize_domain(raw: &str) -> String {
    let mut clean = raw.trim().to_lowercase();

    if let Some(rest) = clean.strip_prefix("https://") {
        clean = rest.to_string();
    } else if let Some(rest) = clean.strip_prefix("http://") {
        clean = rest.to_string();
    }

    if let Some(rest) = clean.strip_prefix("www.") {
        clean = rest.to_string();
    }

    match clean.split_once('/') {
        Some((host, _)) => host.to_string(),
        None => clean,
    }
}

/// Probes one blocklist zone for a domain. Never raises, never retries.
pub async fn probe_zone(lookup: &dyn RecordLookup, domain: &str, zone: &str) -> ProbeOutcome {
    let query = format!("{}.{}", normalize_domain(domain), zone);

    match lookup.lookup_a(&query).await {
        Ok(addrs) => {
            if addrs.iter().any(|addr| addr.octets()[0] == 127) {
                log::info!("{domain} is listed on {zone}");
                ProbeOutcome::Listed
            } else {
                ProbeOutcome::NotListed
            }
        }
        Err(DnsError::NotFound(_)) => ProbeOutcome::NotListed,
        Err(e) => {
            log::warn!("blocklist probe against {zone} failed for {domain}: {e}");
            ProbeOutcome::CheckFailed
        }
    }
}
