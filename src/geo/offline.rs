//! Offline geolocation lookup backed by IP2Location BIN databases.
//!
//! IP2Location ships separate IPv4 and IPv6 databases; the classified address
//! family picks the handle. Both handles are opened once at startup and live
//! for the process lifetime.

use std::net::IpAddr;
use std::path::Path;
use std::sync::Mutex;

use ip2location::{Record, DB};

use super::classify::classify;
use super::types::GeoRecord;
use super::OfflineGeoLookup;
use crate::error_handling::{GeoError, InitializationError};

/// Pre-opened IP2Location database pair.
///
/// The reader's lookup call takes `&mut self` (it seeks inside the database
/// image), so each handle sits behind a mutex. The critical section is a
/// single record read.
pub struct Ip2LocationDb {
    v4: Mutex<DB>,
    v6: Mutex<DB>,
}

impl Ip2LocationDb {
    /// Opens both database files, failing fast on either.
    pub fn open(v4_path: &Path, v6_path: &Path) -> Result<Self, InitializationError> {
        log::info!("Loading IP2Location IPv4 database from: {}", v4_path.display());
        let v4 = DB::from_file(v4_path.to_string_lossy().as_ref()).map_err(|e| {
            InitializationError::GeoDatabaseError(format!(
                "failed to open {}: {:?}",
                v4_path.display(),
                e
            ))
        })?;

        log::info!("Loading IP2Location IPv6 database from: {}", v6_path.display());
        let v6 = DB::from_file(v6_path.to_string_lossy().as_ref()).map_err(|e| {
            InitializationError::GeoDatabaseError(format!(
                "failed to open {}: {:?}",
                v6_path.display(),
                e
            ))
        })?;

        Ok(Self {
            v4: Mutex::new(v4),
            v6: Mutex::new(v6),
        })
    }

    fn query(&self, ip: IpAddr, address: &str) -> Result<GeoRecord, GeoError> {
        let handle = match ip {
            IpAddr::V4(_) => &self.v4,
            IpAddr::V6(_) => &self.v6,
        };
        let mut db = handle
            .lock()
            .map_err(|_| GeoError::Lookup("database handle lock poisoned".to_string()))?;
        let record = db
            .ip_lookup(ip)
            .map_err(|e| GeoError::Lookup(format!("{:?}", e)))?;

        match record {
            Record::LocationDb(rec) => {
                let mut result = GeoRecord {
                    ip: address.to_string(),
                    ..Default::default()
                };
                if let Some(country) = rec.country {
                    result.country_code = Some(country.short_name.to_string());
                    result.country_name = Some(country.long_name.to_string());
                }
                result.region = rec.region.map(|s| s.to_string());
                result.city = rec.city.map(|s| s.to_string());
                result.latitude = rec.latitude;
                result.longitude = rec.longitude;
                result.zip_code = rec.zip_code.map(|s| s.to_string());
                result.time_zone = rec.time_zone.map(|s| s.to_string());
                result.isp = rec.isp.map(|s| s.to_string());
                Ok(result)
            }
            _ => Err(GeoError::Lookup(
                "database returned a non-location record".to_string(),
            )),
        }
    }
}

impl OfflineGeoLookup for Ip2LocationDb {
    fn lookup(&self, address: &str) -> Result<GeoRecord, GeoError> {
        let ip = classify(address)?;
        self.query(ip, address)
    }
}
