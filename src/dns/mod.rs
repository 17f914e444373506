//! DNS lookups for the check flow.
//!
//! Provides the [`RecordLookup`] capability trait and its production
//! implementation backed by `hickory-resolver`.

mod lookup;

pub use lookup::{HickoryLookup, RecordLookup};
