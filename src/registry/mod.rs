//! Registry (RDAP) lookup.
//!
//! Fetches the RDAP record for an IP address, keeps the verbatim payload for
//! audit, and attaches a best-effort organization-name guess.

mod guess;
mod types;

pub use guess::guess_name;
pub use types::{EnrichedRegistryResult, RegistryEntity, RegistryResponse, Remark};

use std::sync::Arc;

use async_trait::async_trait;

use crate::error_handling::RegistryError;

/// Looks up registry ownership metadata for a target address.
#[async_trait]
pub trait RegistryLookup: Send + Sync {
    /// Fetches and enriches the registry record for `target`.
    async fn lookup(&self, target: &str) -> Result<EnrichedRegistryResult, RegistryError>;
}

/// RDAP client issuing a single GET per lookup against a fixed endpoint.
pub struct RdapClient {
    client: Arc<reqwest::Client>,
    endpoint: String,
}

impl RdapClient {
    /// Creates a client querying `endpoint` (the target IP is appended).
    pub fn new(client: Arc<reqwest::Client>, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl RegistryLookup for RdapClient {
    async fn lookup(&self, target: &str) -> Result<EnrichedRegistryResult, RegistryError> {
        let url = format!("{}{}", self.endpoint, target);
        log::debug!("querying registry: {}", url);

        // One attempt, no retry. The body is needed twice: verbatim for the
        // audit field and parsed for the structured response.
        let response = self.client.get(&url).send().await?;
        let raw_body = response.text().await?;
        let parsed: RegistryResponse = serde_json::from_str(&raw_body)?;
        let guessed_name = guess_name(&parsed);

        Ok(EnrichedRegistryResult {
            rdap_response: parsed,
            rdap_response_raw: raw_body,
            guessed_name,
        })
    }
}
