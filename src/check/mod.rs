//! The reputation check flow.
//!
//! A check is a linear pipeline: validate the domain, resolve the required
//! domain records, fan out the independent enrichment lookups, merge. The
//! fan-out step is a join barrier, not a race: all three sub-lookups always
//! settle with a value, bounding total latency by the slowest one.

use serde::Serialize;

use crate::blocklist::probe_zone;
use crate::config::Config;
use crate::dns::RecordLookup;
use crate::error_handling::{CheckError, DnsError};
use crate::whois::{lookup_domain_status, resolve_ip_owner, RawWhois};

/// Blocklist verdicts reported per zone.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BlacklistReport {
    /// Listed on SURBL (`multi.surbl.org`)
    pub surbl: bool,
    /// Listed on Spamhaus DBL (`dbl.spamhaus.org`)
    pub dbl: bool,
}

/// The consolidated report for one domain.
///
/// Built incrementally inside [`run_check`] and only returned once every
/// sub-lookup has settled; a partial report never escapes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainReport {
    /// The domain as supplied (trimmed)
    pub domain: String,
    /// First resolved A record, absent when the answer held none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a_record: Option<String>,
    /// Mail-exchange hostnames in resolver order
    pub mx: Vec<String>,
    /// Nameserver hostnames
    pub ns: Vec<String>,
    /// Domain status codes from the WHOIS record (possibly empty)
    pub whois_status: Vec<String>,
    /// Owner of the first resolved address, or a sentinel
    pub ip_owner: String,
    /// Blocklist verdicts
    pub blacklist: BlacklistReport,
}

fn upstream(e: impl std::fmt::Display) -> CheckError {
    CheckError::UpstreamLookupFailed(e.to_string())
}

/// Runs the full check flow for one domain.
///
/// Required lookups (A, MX, NS, WHOIS-domain) run concurrently and abort the
/// request on the first failure; MX/NS "no records" degrades to an empty
/// list. The enrichment fan-out (IP owner, SURBL, DBL) never fails — its
/// lookups degrade to sentinels instead. No retries anywhere.
pub async fn run_check(
    records: &dyn RecordLookup,
    whois: &dyn RawWhois,
    config: &Config,
    domain: &str,
) -> Result<DomainReport, CheckError> {
    // VALIDATE
    let domain = domain.trim();
    if domain.is_empty() {
        return Err(CheckError::InvalidRequest);
    }

    // RESOLVE_DOMAIN
    let a_fut = async { records.lookup_a(domain).await.map_err(upstream) };
    let mx_fut = async {
        match records.lookup_mx(domain).await {
            Ok(mx) => Ok(mx),
            Err(DnsError::NotFound(_)) => Ok(Vec::new()),
            Err(e) => Err(upstream(e)),
        }
    };
    let ns_fut = async {
        match records.lookup_ns(domain).await {
            Ok(ns) => Ok(ns),
            Err(DnsError::NotFound(_)) => Ok(Vec::new()),
            Err(e) => Err(upstream(e)),
        }
    };
    let status_fut = async { lookup_domain_status(whois, domain).await.map_err(upstream) };

    let (a_records, mx, ns, whois_status) =
        tokio::try_join!(a_fut, mx_fut, ns_fut, status_fut)?;

    // FAN_OUT: three independent lookups joined as a barrier
    let ip = a_records.first().map(ToString::to_string);
    let (owner, surbl, dbl) = tokio::join!(
        resolve_ip_owner(whois, ip.as_deref()),
        probe_zone(records, domain, &config.surbl_zone),
        probe_zone(records, domain, &config.dbl_zone),
    );

    // MERGE
    Ok(DomainReport {
        domain: domain.to_string(),
        a_record: ip,
        mx,
        ns,
        whois_status,
        ip_owner: owner.to_report_string(),
        blacklist: BlacklistReport {
            surbl: surbl.is_listed(),
            dbl: dbl.is_listed(),
        },
    })
}
