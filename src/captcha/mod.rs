//! CAPTCHA token verification.
//!
//! Every lookup request carries a reCAPTCHA token that must verify before any
//! billable external call is made. Verification fails closed: transport and
//! decode failures are errors, never treated as a pass.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error_handling::CaptchaError;

/// Verifies a client-supplied CAPTCHA token.
///
/// The orchestrator depends on this trait so tests can substitute a counting
/// stub for the network-backed validator.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Returns `Ok(())` only when the verification service confirmed the token.
    async fn validate(&self, token: &str) -> Result<(), CaptchaError>;
}

/// Response body of the siteverify endpoint.
#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    success: bool,
    #[serde(default)]
    challenge_ts: Option<DateTime<Utc>>,
    #[serde(default)]
    hostname: Option<String>,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

/// Token validator backed by the Google reCAPTCHA siteverify endpoint.
pub struct RecaptchaValidator {
    client: Arc<reqwest::Client>,
    verify_url: String,
    secret: String,
}

impl RecaptchaValidator {
    /// Creates a validator posting to `verify_url` with the given shared secret.
    pub fn new(
        client: Arc<reqwest::Client>,
        verify_url: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            client,
            verify_url: verify_url.into(),
            secret: secret.into(),
        }
    }
}

#[async_trait]
impl TokenValidator for RecaptchaValidator {
    async fn validate(&self, token: &str) -> Result<(), CaptchaError> {
        let response = self
            .client
            .post(&self.verify_url)
            .form(&[("secret", self.secret.as_str()), ("response", token)])
            .send()
            .await?;
        let body: SiteVerifyResponse = response.json().await?;

        if body.success {
            log::debug!(
                "recaptcha verification succeeded (hostname: {:?}, challenge_ts: {:?})",
                body.hostname,
                body.challenge_ts
            );
            Ok(())
        } else {
            match body.error_codes.first() {
                Some(code) => log::warn!("recaptcha verification failed: {}", code),
                None => log::warn!("recaptcha verification failed"),
            }
            Err(CaptchaError::Rejected {
                error_codes: body.error_codes,
            })
        }
    }
}
