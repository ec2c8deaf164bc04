//! Error type definitions.
//!
//! Component-level errors (`CaptchaError`, `RegistryError`, `GeoError`) wrap
//! collaborator failures; `EnrichError` is the request-level taxonomy the
//! orchestrator surfaces, with exactly one wire error code per variant.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::Serialize;
use thiserror::Error;

/// Error codes surfaced to HTTP clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    /// Bad request body or failed CAPTCHA verification.
    #[serde(rename = "ERROR_INVALID_INPUT")]
    InvalidInput,
    /// Registry transport or decode failure.
    #[serde(rename = "ERROR_RDAP_ERROR")]
    RdapError,
    /// Offline geolocation classification or lookup failure.
    #[serde(rename = "ERROR_IP2LOCATION_ERROR")]
    Ip2LocationError,
    /// Online geolocation classification or lookup failure.
    #[serde(rename = "ERROR_GEOIP2_LOCATION_ERROR")]
    GeoIp2LocationError,
}

/// Error types for initialization failures.
///
/// These are fatal to the process, never to an individual request.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error opening a geolocation database file.
    #[error("Geolocation database error: {0}")]
    GeoDatabaseError(String),
}

/// CAPTCHA token verification failure.
///
/// Transport and decode failures are errors in their own right: verification
/// must fail closed, never default to success.
#[derive(Error, Debug)]
pub enum CaptchaError {
    /// The verification request could not be completed or decoded.
    #[error("verification request failed: {0}")]
    Transport(#[from] ReqwestError),

    /// The verification service rejected the token.
    #[error("token rejected by verification service")]
    Rejected {
        /// Error codes reported by the verification service, in order.
        error_codes: Vec<String>,
    },
}

/// Registry (RDAP) lookup failure.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The registry request could not be completed or its body read.
    #[error("registry request failed: {0}")]
    Transport(#[from] ReqwestError),

    /// The registry body is not valid JSON of the expected shape.
    #[error("registry response is not decodable: {0}")]
    Decode(#[from] serde_json::Error),

    /// The spawned lookup task did not complete.
    #[error("registry lookup task failed: {0}")]
    Task(String),
}

/// Geolocation lookup failure (offline or online source).
#[derive(Error, Debug)]
pub enum GeoError {
    /// The target is neither IPv4- nor IPv6-shaped; no handle was queried.
    #[error("not an IPv4 or IPv6 address: {0:?}")]
    InvalidAddress(String),

    /// The database reader failed to resolve the address.
    #[error("database lookup failed: {0}")]
    Lookup(String),
}

/// Request-level error taxonomy.
///
/// Terminal and mutually exclusive per request: the orchestrator surfaces
/// exactly one of these, and none are retried.
#[derive(Error, Debug)]
pub enum EnrichError {
    /// Bad request body or failed CAPTCHA gate.
    #[error("invalid input")]
    InvalidInput,

    /// The registry lookup failed.
    #[error("registry lookup failed: {0}")]
    Registry(RegistryError),

    /// The offline geolocation lookup failed.
    #[error("offline geolocation lookup failed: {0}")]
    OfflineGeo(GeoError),

    /// The online geolocation lookup failed.
    #[error("online geolocation lookup failed: {0}")]
    OnlineGeo(GeoError),
}

impl EnrichError {
    /// Wire error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            EnrichError::InvalidInput => ErrorCode::InvalidInput,
            EnrichError::Registry(_) => ErrorCode::RdapError,
            EnrichError::OfflineGeo(_) => ErrorCode::Ip2LocationError,
            EnrichError::OnlineGeo(_) => ErrorCode::GeoIp2LocationError,
        }
    }

    /// Rank used to pick one error when several lookups failed.
    ///
    /// Lower wins. The order (offline geo, online geo, registry) is a fixed
    /// tie-break, not a severity ranking.
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            EnrichError::InvalidInput => 0,
            EnrichError::OfflineGeo(_) => 1,
            EnrichError::OnlineGeo(_) => 2,
            EnrichError::Registry(_) => 3,
        }
    }
}
