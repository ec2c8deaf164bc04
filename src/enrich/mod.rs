//! Request enrichment orchestration.
//!
//! The request-level control flow: validate the CAPTCHA token (a strictly
//! sequential gate), fan out the registry and geolocation lookups as
//! independent tasks, then join them under a fixed error precedence. A
//! request produces exactly one success payload or exactly one error; there
//! is no partial success and nothing is retried.

mod join;


use std::sync::Arc;

use serde::Deserialize;

use crate::captcha::TokenValidator;
use crate::error_handling::EnrichError;
use crate::geo::{GeoCityRecord, GeoRecord, OfflineGeoLookup, OnlineGeoLookup};
use crate::registry::{EnrichedRegistryResult, RegistryLookup};

/// A lookup request as received from the client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LookupRequest {
    /// Target IP address.
    pub input: String,
    /// reCAPTCHA token proving a human submitted the request.
    pub recaptcha_token: String,
}

/// Combined success payload: all configured lookups succeeded.
#[derive(Debug, Clone)]
pub struct EnrichmentResult {
    /// Registry response, verbatim payload, and guessed name.
    pub registry: EnrichedRegistryResult,
    /// Offline geolocation record.
    pub offline_geo: GeoRecord,
    /// Online geolocation record; `None` only when no online database is
    /// configured.
    pub online_geo: Option<GeoCityRecord>,
}

/// Runs the enrichment pipeline for one request.
pub struct Orchestrator {
    captcha: Arc<dyn TokenValidator>,
    registry: Arc<dyn RegistryLookup>,
    offline: Arc<dyn OfflineGeoLookup>,
    online: Option<Arc<dyn OnlineGeoLookup>>,
}

impl Orchestrator {
    /// Creates an orchestrator over the given collaborators.
    pub fn new(
        captcha: Arc<dyn TokenValidator>,
        registry: Arc<dyn RegistryLookup>,
        offline: Arc<dyn OfflineGeoLookup>,
        online: Option<Arc<dyn OnlineGeoLookup>>,
    ) -> Self {
        Self {
            captcha,
            registry,
            offline,
            online,
        }
    }

    /// Enriches one request.
    ///
    /// The CAPTCHA gate strictly precedes the fan-out: external lookups are
    /// not spent before the input is accepted as plausible. After the gate,
    /// the registry and geolocation lookups run as independent tasks with no
    /// ordering between them.
    pub async fn enrich(&self, request: &LookupRequest) -> Result<EnrichmentResult, EnrichError> {
        if let Err(e) = self.captcha.validate(&request.recaptcha_token).await {
            log::warn!("captcha gate rejected the request: {}", e);
            return Err(EnrichError::InvalidInput);
        }

        let registry = Arc::clone(&self.registry);
        let target = request.input.clone();
        let registry_task = tokio::spawn(async move { registry.lookup(&target).await });

        // The database reads are synchronous; keep them off the async workers.
        let offline = Arc::clone(&self.offline);
        let target = request.input.clone();
        let offline_task = tokio::task::spawn_blocking(move || offline.lookup(&target));

        let online_task = self.online.as_ref().map(|online| {
            let online = Arc::clone(online);
            let target = request.input.clone();
            tokio::task::spawn_blocking(move || online.lookup(&target))
        });

        join::join_lookups(registry_task, offline_task, online_task).await
    }
}
