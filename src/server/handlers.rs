//! Request handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::types::{AppState, HealthResponse, LookupResponse};
use crate::enrich::LookupRequest;
use crate::error_handling::ErrorCode;

/// Lookup endpoint: validates the body, runs the enrichment pipeline, and
/// maps the outcome to the wire format.
///
/// A body that does not decode is invalid input; no collaborator is called
/// for it. Failures are HTTP 400 with the source's error code.
pub async fn whois_handler(
    State(state): State<AppState>,
    body: Result<Json<LookupRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(json) => json,
        Err(rejection) => {
            log::debug!("request body rejected: {}", rejection);
            return (
                StatusCode::BAD_REQUEST,
                Json(LookupResponse::error(ErrorCode::InvalidInput)),
            )
                .into_response();
        }
    };

    match state.orchestrator.enrich(&request).await {
        Ok(result) => (StatusCode::OK, Json(LookupResponse::ok(result))).into_response(),
        Err(error) => {
            log::warn!("enrichment failed for {:?}: {}", request.input, error);
            (
                StatusCode::BAD_REQUEST,
                Json(LookupResponse::error(error.code())),
            )
                .into_response()
        }
    }
}

/// Health endpoint: 200 when both canonical geolocation lookups succeed,
/// 503 otherwise.
pub async fn health_handler(State(state): State<AppState>) -> Response {
    let health = Arc::clone(&state.health);
    let healthy = tokio::task::spawn_blocking(move || health.check())
        .await
        .unwrap_or(false);
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(HealthResponse { healthy })).into_response()
}

/// Echoes the request headers back as a JSON object, preserving multi-value
/// headers.
pub async fn headers_handler(headers: HeaderMap) -> Response {
    let mut echoed: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for key in headers.keys() {
        let values = headers
            .get_all(key)
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
            .collect();
        echoed.insert(key.as_str().to_string(), values);
    }
    Json(echoed).into_response()
}
