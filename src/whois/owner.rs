//! Heuristic owner extraction from raw WHOIS text.
//!
//! Registrar output has no schema, so ownership is recovered by scanning for
//! the first line whose field name is one of the recognized
//! organization-indicating keys. The scan is order-sensitive on purpose: the
//! recognized-field list and the first-match-wins rule are tuned against real
//! registrar formats and must not be reordered without fixtures.

use crate::error_handling::WhoisError;

use super::transport::RawWhois;

/// Case-insensitive field names that indicate an organization/owner value.
const OWNER_FIELDS: &[&str] = &[
    "orgname",
    "org-name",
    "netname",
    "owner",
    "descr",
    "custname",
    "organisation",
    "org",
];

/// Sentinel rendered when no A record was available to look up.
pub const OWNER_NO_ADDRESS: &str = "N/A";
/// Sentinel rendered when the text parsed but held no recognized field.
pub const OWNER_NOT_FOUND: &str = "Owner info not found.";
/// Sentinel rendered when the raw WHOIS query itself failed.
pub const OWNER_UNAVAILABLE: &str = "WHOIS failed or unavailable.";

/// Outcome of the IP-owner lookup, kept tagged until the response boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerInfo {
    /// No IP address was resolved, so no lookup was attempted.
    NoAddress,
    /// A recognized owner field was found.
    Found(String),
    /// The WHOIS text parsed cleanly but contained no recognized field.
    NotFound,
    /// The raw WHOIS query failed (transport error or empty output).
    Unavailable,
}

impl OwnerInfo {
    /// Renders the sentinel string used in the report's `ipOwner` field.
    pub fn to_report_string(&self) -> String {
        match self {
            OwnerInfo::NoAddress => OWNER_NO_ADDRESS.to_string(),
            OwnerInfo::Found(org) => org.clone(),
            OwnerInfo::NotFound => OWNER_NOT_FOUND.to_string(),
            OwnerInfo::Unavailable => OWNER_UNAVAILABLE.to_string(),
        }
    }
}

/// Scans raw WHOIS text for the first recognized owner field.
///
/// Lines are matched as `<field>: <value>` where the field is alphabetic or
/// hyphenated; the split happens at the first colon only, so values with
/// embedded colons (timestamps inside `descr`, IPv6 literals) survive intact.
/// Values of 2 characters or fewer after trimming are skipped as noise.
pub fn parse_owner(raw: &str) -> Option<String> {
    for line in raw.lines() {
        let line = line.trim();
        let Some((field, value)) = line.split_once(':') else {
            continue;
        };

        let field = field.trim();
        if field.is_empty()
            || !field
                .chars()
                .all(|c| c.is_ascii_alphabetic() || c == '-')
        {
            continue;
        }
        if !OWNER_FIELDS.contains(&field.to_ascii_lowercase().as_str()) {
            continue;
        }

        let value = value.trim();
        if value.len() > 2 {
            // First match wins; do not scan further
            return Some(value.to_string());
        }
    }
    None
}

/// Resolves the owner of an IP address via raw WHOIS.
///
/// With no address there is nothing to look up; transport failures collapse
/// into [`OwnerInfo::Unavailable`] rather than failing the request.
pub async fn resolve_ip_owner(whois: &dyn RawWhois, ip: Option<&str>) -> OwnerInfo {
    let Some(ip) = ip.map(str::trim).filter(|s| !s.is_empty()) else {
        return OwnerInfo::NoAddress;
    };

    match whois.query(ip).await {
        Ok(raw) => match parse_owner(&raw) {
            Some(org) => OwnerInfo::Found(org),
            None => OwnerInfo::NotFound,
        },
        Err(e @ WhoisError::Timeout { .. }) => {
            log::warn!("WHOIS owner lookup for {ip} timed out: {e}");
            OwnerInfo::Unavailable
        }
        Err(e) => {
            log::warn!("WHOIS owner lookup failed for {ip}: {e}");
            OwnerInfo::Unavailable
        }
    }
}
