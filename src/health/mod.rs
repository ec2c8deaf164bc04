//! Health checking.
//!
//! A thin wrapper over the offline geolocation lookup: resolving one
//! well-known IPv4 and one well-known IPv6 address proves both database
//! handles are readable.

use std::sync::Arc;

use crate::config::{HEALTH_CHECK_IPV4, HEALTH_CHECK_IPV6};
use crate::geo::OfflineGeoLookup;

/// Probes the offline geolocation handles with canonical addresses.
pub struct HealthChecker {
    offline: Arc<dyn OfflineGeoLookup>,
}

impl HealthChecker {
    /// Creates a checker over the given offline lookup.
    pub fn new(offline: Arc<dyn OfflineGeoLookup>) -> Self {
        Self { offline }
    }

    /// Returns `true` when both canonical lookups succeed.
    pub fn check(&self) -> bool {
        let v4 = self.offline.lookup(HEALTH_CHECK_IPV4);
        if let Err(e) = &v4 {
            log::warn!("health check failed for {}: {}", HEALTH_CHECK_IPV4, e);
        }
        let v6 = self.offline.lookup(HEALTH_CHECK_IPV6);
        if let Err(e) = &v6 {
            log::warn!("health check failed for {}: {}", HEALTH_CHECK_IPV6, e);
        }
        v4.is_ok() && v6.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::GeoError;
    use crate::geo::GeoRecord;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct StubOffline {
        failing: HashSet<&'static str>,
        seen: Mutex<Vec<String>>,
    }

    impl StubOffline {
        fn failing_on(addresses: &[&'static str]) -> Self {
            Self {
                failing: addresses.iter().copied().collect(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl OfflineGeoLookup for StubOffline {
        fn lookup(&self, address: &str) -> Result<GeoRecord, GeoError> {
            self.seen.lock().unwrap().push(address.to_string());
            if self.failing.contains(address) {
                Err(GeoError::Lookup("stub failure".to_string()))
            } else {
                Ok(GeoRecord {
                    ip: address.to_string(),
                    ..Default::default()
                })
            }
        }
    }

    #[test]
    fn test_healthy_when_both_lookups_succeed() {
        let stub = Arc::new(StubOffline::failing_on(&[]));
        let checker = HealthChecker::new(Arc::clone(&stub) as Arc<dyn OfflineGeoLookup>);
        assert!(checker.check());
        assert_eq!(
            *stub.seen.lock().unwrap(),
            vec![HEALTH_CHECK_IPV4.to_string(), HEALTH_CHECK_IPV6.to_string()]
        );
    }

    #[test]
    fn test_unhealthy_when_ipv4_lookup_fails() {
        let stub = Arc::new(StubOffline::failing_on(&[HEALTH_CHECK_IPV4]));
        let checker = HealthChecker::new(stub as Arc<dyn OfflineGeoLookup>);
        assert!(!checker.check());
    }

    #[test]
    fn test_unhealthy_when_ipv6_lookup_fails() {
        let stub = Arc::new(StubOffline::failing_on(&[HEALTH_CHECK_IPV6]));
        let checker = HealthChecker::new(stub as Arc<dyn OfflineGeoLookup>);
        assert!(!checker.check());
    }
}
