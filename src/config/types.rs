//! Configuration types and CLI options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_IP2LOCATION_V4, DEFAULT_IP2LOCATION_V6, DEFAULT_LISTEN_ADDR, DEFAULT_RDAP_ENDPOINT,
    DEFAULT_TIMEOUT_SECS, RECAPTCHA_SITE_VERIFY_URL,
};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Parsed from the command line in the binary; tests construct it directly
/// via `Config::default()` and override fields.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ip_enrich",
    about = "Enriches an IP address with RDAP ownership metadata and geolocation records"
)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen: String,

    /// Path to the IP2Location IPv4 BIN database
    #[arg(long, default_value = DEFAULT_IP2LOCATION_V4)]
    pub ip2location_v4: PathBuf,

    /// Path to the IP2Location IPv6 BIN database
    #[arg(long, default_value = DEFAULT_IP2LOCATION_V6)]
    pub ip2location_v6: PathBuf,

    /// Path to the MaxMind GeoLite2 City database (enables the second geo source)
    #[arg(long)]
    pub geolite2_city: Option<PathBuf>,

    /// RDAP endpoint base URL; the target IP is appended
    #[arg(long, default_value = DEFAULT_RDAP_ENDPOINT)]
    pub rdap_endpoint: String,

    /// reCAPTCHA verification endpoint
    #[arg(long, default_value = RECAPTCHA_SITE_VERIFY_URL)]
    pub recaptcha_verify_url: String,

    /// Per-call timeout for external HTTP requests, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Allowed CORS origin (repeatable; all origins are allowed when none are given)
    #[arg(long = "cors-origin")]
    pub cors_origins: Vec<String>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN_ADDR.to_string(),
            ip2location_v4: PathBuf::from(DEFAULT_IP2LOCATION_V4),
            ip2location_v6: PathBuf::from(DEFAULT_IP2LOCATION_V6),
            geolite2_city: None,
            rdap_endpoint: DEFAULT_RDAP_ENDPOINT.to_string(),
            recaptcha_verify_url: RECAPTCHA_SITE_VERIFY_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            cors_origins: Vec::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.listen, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.rdap_endpoint, DEFAULT_RDAP_ENDPOINT);
        assert_eq!(config.recaptcha_verify_url, RECAPTCHA_SITE_VERIFY_URL);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECS);
        assert!(config.geolite2_city.is_none());
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_config_parses_cli_overrides() {
        let config = Config::parse_from([
            "ip_enrich",
            "--listen",
            "127.0.0.1:9000",
            "--geolite2-city",
            "/data/GeoLite2-City.mmdb",
            "--cors-origin",
            "https://example.com",
            "--cors-origin",
            "http://localhost:3000",
        ]);
        assert_eq!(config.listen, "127.0.0.1:9000");
        assert_eq!(
            config.geolite2_city,
            Some(PathBuf::from("/data/GeoLite2-City.mmdb"))
        );
        assert_eq!(
            config.cors_origins,
            vec![
                "https://example.com".to_string(),
                "http://localhost:3000".to_string()
            ]
        );
    }
}
