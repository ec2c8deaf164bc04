//! HTTP server data structures.

use std::sync::Arc;

use serde::Serialize;

use crate::enrich::{EnrichmentResult, Orchestrator};
use crate::error_handling::ErrorCode;
use crate::geo::{GeoCityRecord, GeoRecord};
use crate::health::HealthChecker;
use crate::registry::EnrichedRegistryResult;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Request enrichment pipeline.
    pub orchestrator: Arc<Orchestrator>,
    /// Geolocation handle prober.
    pub health: Arc<HealthChecker>,
}

/// Marker distinguishing success from failure responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResponseStatus {
    /// The request succeeded and every lookup result is present.
    #[serde(rename = "OK")]
    Ok,
    /// The request failed; `errorCode` names the failed source.
    #[serde(rename = "ERROR")]
    Error,
}

/// Body of every lookup reply, success or failure.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    /// Success/failure marker.
    pub status_code: ResponseStatus,
    /// Error code; present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    /// Registry result; present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rdap_response_with_guess: Option<EnrichedRegistryResult>,
    /// Offline geolocation record; present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip2_location_record: Option<GeoRecord>,
    /// Online geolocation record; present when that source is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_city_record: Option<GeoCityRecord>,
}

impl LookupResponse {
    /// Builds the success payload from an enrichment result.
    pub fn ok(result: EnrichmentResult) -> Self {
        Self {
            status_code: ResponseStatus::Ok,
            error_code: None,
            rdap_response_with_guess: Some(result.registry),
            ip2_location_record: Some(result.offline_geo),
            geo_city_record: result.online_geo,
        }
    }

    /// Builds the failure payload for an error code.
    pub fn error(code: ErrorCode) -> Self {
        Self {
            status_code: ResponseStatus::Error,
            error_code: Some(code),
            rdap_response_with_guess: None,
            ip2_location_record: None,
            geo_city_record: None,
        }
    }
}

/// Body of the health endpoint reply.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Whether both canonical geolocation lookups succeeded.
    pub healthy: bool,
}
