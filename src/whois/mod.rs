//! WHOIS lookups: raw transport, owner extraction, and domain status.
//!
//! The transport is an injected capability ([`RawWhois`]) so everything above
//! it stays testable without a network. Two consumers sit on top:
//! - the domain-record path, which projects raw text down to the list of
//!   `domain status` codes;
//! - the IP-owner path, which runs the heuristic owner parser.

mod owner;
mod status;
mod transport;

pub use owner::{
    parse_owner, resolve_ip_owner, OwnerInfo, OWNER_NOT_FOUND, OWNER_NO_ADDRESS,
    OWNER_UNAVAILABLE,
};
pub use status::extract_domain_status;
pub use transport::{RawWhois, TcpWhoisClient};

use crate::error_handling::WhoisError;

/// Fetches the WHOIS record for a domain and extracts its status codes.
///
/// A transport failure here is a required-path failure: the caller aborts the
/// whole request rather than degrading.
pub async fn lookup_domain_status(
    whois: &dyn RawWhois,
    domain: &str,
) -> Result<Vec<String>, WhoisError> {
    let raw = whois.query(domain).await?;
    Ok(extract_domain_status(&raw))
}
