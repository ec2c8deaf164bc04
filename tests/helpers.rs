// Shared test helpers: stub geolocation sources and app assembly.
//
// The stubs mirror the production lookups' contract, including strict
// address classification before any "handle" is consulted.

use std::net::SocketAddr;
use std::sync::Arc;

use ip_enrich::captcha::RecaptchaValidator;
use ip_enrich::enrich::Orchestrator;
use ip_enrich::error_handling::GeoError;
use ip_enrich::geo::{classify, GeoCityRecord, GeoRecord, OfflineGeoLookup, OnlineGeoLookup};
use ip_enrich::health::HealthChecker;
use ip_enrich::registry::RdapClient;
use ip_enrich::server::{router, AppState};

/// Offline lookup stub with the production classification behavior.
#[allow(dead_code)] // Used by other test files
pub struct StubOffline {
    pub fail: bool,
}

impl OfflineGeoLookup for StubOffline {
    fn lookup(&self, address: &str) -> Result<GeoRecord, GeoError> {
        classify(address)?;
        if self.fail {
            Err(GeoError::Lookup("stub offline failure".to_string()))
        } else {
            Ok(GeoRecord {
                ip: address.to_string(),
                country_code: Some("AU".to_string()),
                country_name: Some("Australia".to_string()),
                ..Default::default()
            })
        }
    }
}

/// Online lookup stub with the production classification behavior.
#[allow(dead_code)] // Used by other test files
pub struct StubOnline {
    pub fail: bool,
}

impl OnlineGeoLookup for StubOnline {
    fn lookup(&self, address: &str) -> Result<GeoCityRecord, GeoError> {
        classify(address)?;
        if self.fail {
            Err(GeoError::Lookup("stub online failure".to_string()))
        } else {
            Ok(GeoCityRecord {
                country_code: Some("AU".to_string()),
                city: Some("Brisbane".to_string()),
                ..Default::default()
            })
        }
    }
}

/// Builds the full application against a mock external-service base URL and
/// serves it on an ephemeral port.
///
/// `mock_base` hosts both the CAPTCHA verification endpoint (`/siteverify`)
/// and the registry endpoint (`/ip/<target>`).
#[allow(dead_code)] // Used by other test files
pub async fn spawn_app(mock_base: &str, offline_fail: bool, online_fail: bool) -> SocketAddr {
    let client = Arc::new(reqwest::Client::new());
    let captcha = Arc::new(RecaptchaValidator::new(
        Arc::clone(&client),
        format!("{}/siteverify", mock_base),
        "test-secret",
    ));
    let registry = Arc::new(RdapClient::new(
        Arc::clone(&client),
        format!("{}/ip/", mock_base),
    ));
    let offline: Arc<dyn OfflineGeoLookup> = Arc::new(StubOffline { fail: offline_fail });
    let online: Arc<dyn OnlineGeoLookup> = Arc::new(StubOnline { fail: online_fail });

    let orchestrator = Arc::new(Orchestrator::new(
        captcha,
        registry,
        Arc::clone(&offline),
        Some(online),
    ));
    let health = Arc::new(HealthChecker::new(offline));

    let app = router(
        AppState {
            orchestrator,
            health,
        },
        &[],
    )
    .expect("router should build");
    serve(app).await
}

/// Serves a router on an ephemeral local port and returns its address.
#[allow(dead_code)] // Used by other test files
pub async fn serve(app: axum::Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("read local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });
    addr
}

/// Reads a registry fixture file verbatim.
#[allow(dead_code)] // Used by other test files
pub fn read_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {}: {}", path, e))
}
