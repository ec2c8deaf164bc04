//! Online geolocation lookup backed by a MaxMind GeoLite2 City database.

use std::path::Path;

use maxminddb::Reader;

use super::classify::classify;
use super::types::GeoCityRecord;
use super::OnlineGeoLookup;
use crate::error_handling::{GeoError, InitializationError};

/// Pre-opened GeoLite2 City reader.
///
/// A single database serves both address families. Lookups take `&self`, so
/// no locking is needed; the reader is shared read-only across requests.
pub struct GeoCityDb {
    reader: Reader<Vec<u8>>,
}

impl GeoCityDb {
    /// Reads and parses the database file, failing fast on error.
    pub async fn open(path: &Path) -> Result<Self, InitializationError> {
        log::info!("Loading GeoLite2 City database from: {}", path.display());
        let db_bytes = tokio::fs::read(path).await.map_err(|e| {
            InitializationError::GeoDatabaseError(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))
        })?;
        let reader = Reader::from_source(db_bytes).map_err(|e| {
            InitializationError::GeoDatabaseError(format!(
                "failed to parse {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self { reader })
    }
}

impl OnlineGeoLookup for GeoCityDb {
    fn lookup(&self, address: &str) -> Result<GeoCityRecord, GeoError> {
        let ip = classify(address)?;

        let lookup = self
            .reader
            .lookup(ip)
            .map_err(|e| GeoError::Lookup(e.to_string()))?;
        if !lookup.has_data() {
            return Err(GeoError::Lookup(format!("no city data for {}", address)));
        }
        let city: maxminddb::geoip2::City = match lookup.decode() {
            Ok(Some(city)) => city,
            Ok(None) => return Err(GeoError::Lookup(format!("no city data for {}", address))),
            Err(e) => return Err(GeoError::Lookup(e.to_string())),
        };

        let mut record = GeoCityRecord {
            country_code: city.country.iso_code.map(|s| s.to_string()),
            country_name: city.country.names.english.map(|s| s.to_string()),
            city: city.city.names.english.map(|s| s.to_string()),
            latitude: city.location.latitude,
            longitude: city.location.longitude,
            time_zone: city.location.time_zone.map(|s| s.to_string()),
            postal_code: city.postal.code.map(|s| s.to_string()),
            ..Default::default()
        };
        if let Some(subdivision) = city.subdivisions.first() {
            record.region = subdivision.names.english.map(|s| s.to_string());
        }
        Ok(record)
    }
}
