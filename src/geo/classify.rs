//! Strict address-family classification.

use std::net::IpAddr;

use crate::error_handling::GeoError;

/// Classifies a lookup target as IPv4 or IPv6.
///
/// Strict by design: the string must parse as an IP address exactly (no
/// surrounding whitespace, no hostnames). A string matching neither family
/// is reported as an invalid address before any database handle is touched.
pub fn classify(address: &str) -> Result<IpAddr, GeoError> {
    address
        .parse::<IpAddr>()
        .map_err(|_| GeoError::InvalidAddress(address.to_string()))
}
