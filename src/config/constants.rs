//! Configuration constants.
//!
//! Endpoint defaults, environment variable names, and timeouts used across
//! the application.

/// Google reCAPTCHA verification endpoint.
pub const RECAPTCHA_SITE_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Environment variable holding the reCAPTCHA shared secret.
pub const RECAPTCHA_KEY_ENV: &str = "RECAPTCHA_KEY";

/// Default RDAP endpoint base; the target IP is appended to this URL.
///
/// APNIC redirects queries for space delegated to other regional registries,
/// so a single base works for all five registries.
pub const DEFAULT_RDAP_ENDPOINT: &str = "https://rdap.apnic.net/ip/";

/// Default listen address for the HTTP server.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Default per-call timeout for external HTTP requests, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default path of the IP2Location IPv4 database.
pub const DEFAULT_IP2LOCATION_V4: &str = "IP2LOCATION-LITE-DB11.BIN";

/// Default path of the IP2Location IPv6 database.
pub const DEFAULT_IP2LOCATION_V6: &str = "IP2LOCATION-LITE-DB11.IPV6.BIN";

/// Canonical IPv4 address used by the health check.
pub const HEALTH_CHECK_IPV4: &str = "1.1.1.1";

/// Canonical IPv6 address used by the health check.
pub const HEALTH_CHECK_IPV6: &str = "2606:4700:4700::1111";
