//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the shared HTTP client.
///
/// One client serves both the registry and the CAPTCHA verification calls.
/// The configured timeout bounds every external request; a timed-out call
/// surfaces as a transport error for its source.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(concat!("ip_enrich/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(Arc::new(client))
}
