//! # domain_reputation
//!
//! An HTTP service that consolidates the reputation signals for a domain
//! into a single JSON report: DNS records (A, MX, NS), WHOIS domain status,
//! the owner of the domain's address, and listing verdicts from two DNS
//! blocklists (SURBL and Spamhaus DBL).
//!
//! ## Architecture
//!
//! A check request flows through a linear pipeline:
//!
//! 1. **Validate** the `domain` query parameter (missing/blank is a 400)
//! 2. **Resolve** the required records concurrently: A, MX, NS, and the
//!    WHOIS domain status; any failure aborts the request (500)
//! 3. **Fan out** the enrichment lookups concurrently: IP owner, SURBL
//!    probe, DBL probe; these degrade to sentinels instead of failing
//! 4. **Merge** everything into a [`check::DomainReport`]
//!
//! Network capabilities sit behind the [`dns::RecordLookup`] and
//! [`whois::RawWhois`] traits so the flow can be exercised without the
//! network.

pub mod blocklist;
pub mod check;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod server;
pub mod whois;

// Re-export the commonly used types at the crate root
pub use check::{run_check, BlacklistReport, DomainReport};
pub use config::Config;
pub use server::{build_router, serve, AppState};
