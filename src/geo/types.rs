//! Geolocation data structures.

use serde::{Deserialize, Serialize};

/// Full record from the offline IP2Location database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoRecord {
    /// The address that was looked up.
    pub ip: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: Option<String>,
    /// Country display name.
    pub country_name: Option<String>,
    /// Region or state name.
    pub region: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// Latitude, when present in the database tier.
    pub latitude: Option<f32>,
    /// Longitude, when present in the database tier.
    pub longitude: Option<f32>,
    /// Postal code.
    pub zip_code: Option<String>,
    /// IANA time zone offset string.
    pub time_zone: Option<String>,
    /// Internet service provider, when present in the database tier.
    pub isp: Option<String>,
}

/// City-precision record from the online GeoLite2 database.
///
/// Semantically overlaps [`GeoRecord`] but carries the MaxMind schema:
/// floating-point coordinates are doubles and the postal field is named
/// differently. Kept separate so both sources appear verbatim in responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoCityRecord {
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: Option<String>,
    /// Country display name (English).
    pub country_name: Option<String>,
    /// First subdivision (region/state) name.
    pub region: Option<String>,
    /// City name (English).
    pub city: Option<String>,
    /// Latitude.
    pub latitude: Option<f64>,
    /// Longitude.
    pub longitude: Option<f64>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// IANA time zone name.
    pub time_zone: Option<String>,
}
