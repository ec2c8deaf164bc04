//! Fan-in of the concurrent lookup tasks.
//!
//! The precedence among simultaneous failures is applied here, once, as an
//! explicit policy. The order (offline geo, online geo, registry) is a fixed
//! tie-break, not a severity ranking; clients depend on it being stable.

use tokio::task::JoinHandle;

use super::EnrichmentResult;
use crate::error_handling::{EnrichError, GeoError, RegistryError};
use crate::geo::{GeoCityRecord, GeoRecord};
use crate::registry::EnrichedRegistryResult;

/// Joins the fanned-out lookup tasks and applies the error precedence.
///
/// Every task runs to completion before any error is surfaced; a failed
/// request discards the other tasks' results rather than cancelling them.
pub(crate) async fn join_lookups(
    registry: JoinHandle<Result<EnrichedRegistryResult, RegistryError>>,
    offline: JoinHandle<Result<GeoRecord, GeoError>>,
    online: Option<JoinHandle<Result<GeoCityRecord, GeoError>>>,
) -> Result<EnrichmentResult, EnrichError> {
    let (registry_outcome, offline_outcome) = tokio::join!(registry, offline);
    let online_outcome = match online {
        Some(handle) => Some(handle.await),
        None => None,
    };

    let mut failures = Vec::new();

    let registry = take(
        registry_outcome
            .unwrap_or_else(|e| Err(RegistryError::Task(e.to_string())))
            .map_err(EnrichError::Registry),
        &mut failures,
    );
    let offline_geo = take(
        offline_outcome
            .unwrap_or_else(|e| Err(GeoError::Lookup(format!("lookup task failed: {}", e))))
            .map_err(EnrichError::OfflineGeo),
        &mut failures,
    );
    let online_geo = match online_outcome {
        Some(outcome) => take(
            outcome
                .unwrap_or_else(|e| Err(GeoError::Lookup(format!("lookup task failed: {}", e))))
                .map_err(EnrichError::OnlineGeo),
            &mut failures,
        ),
        None => None,
    };

    if let Some(error) = first_by_precedence(failures) {
        return Err(error);
    }

    let (Some(registry), Some(offline_geo)) = (registry, offline_geo) else {
        // Unreachable: a missing result always pushed a failure above.
        return Err(EnrichError::InvalidInput);
    };

    Ok(EnrichmentResult {
        registry,
        offline_geo,
        online_geo,
    })
}

/// Picks the surfaced error when more than one lookup failed.
pub(crate) fn first_by_precedence(failures: Vec<EnrichError>) -> Option<EnrichError> {
    failures
        .into_iter()
        .min_by_key(|failure| failure.precedence())
}

fn take<T>(result: Result<T, EnrichError>, failures: &mut Vec<EnrichError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            failures.push(error);
            None
        }
    }
}
