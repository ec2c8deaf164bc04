//! Geolocation lookups.
//!
//! Two independent sources: an offline IP2Location database pair (IPv4 and
//! IPv6 BIN files) and an optional MaxMind GeoLite2 City database. Handles
//! are opened once at startup and shared read-only across requests; the
//! request path never mutates them.

mod classify;
mod offline;
mod online;
mod types;

pub use classify::classify;
pub use offline::Ip2LocationDb;
pub use online::GeoCityDb;
pub use types::{GeoCityRecord, GeoRecord};

use crate::error_handling::GeoError;

/// Looks up the offline geolocation record for an address.
///
/// Implementations must classify the address before dispatching: a string
/// that is neither IPv4- nor IPv6-shaped is an invalid-address error, never
/// a query against the wrong handle.
pub trait OfflineGeoLookup: Send + Sync {
    /// Resolves `address` to a full offline record.
    fn lookup(&self, address: &str) -> Result<GeoRecord, GeoError>;
}

/// Looks up the online city-precision record for an address.
pub trait OnlineGeoLookup: Send + Sync {
    /// Resolves `address` to a city record.
    fn lookup(&self, address: &str) -> Result<GeoCityRecord, GeoError>;
}
