//! ip_enrich library: IP enrichment service core
//!
//! Answers "who/where is this IP address" by combining a registry (RDAP)
//! lookup with one or two geolocation database lookups behind a single HTTP
//! request, gated by CAPTCHA verification. Requests are stateless and
//! independent; the only process-lifetime state is the set of geolocation
//! database handles opened at startup.
//!
//! # Example
//!
//! ```no_run
//! use ip_enrich::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     listen: "127.0.0.1:8080".to_string(),
//!     ..Default::default()
//! };
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod captcha;
pub mod config;
pub mod enrich;
pub mod error_handling;
pub mod geo;
pub mod health;
pub mod initialization;
pub mod registry;
pub mod server;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use run::run_server;

// Internal run module (startup, serve, shutdown)
mod run {
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use log::info;

    use crate::captcha::RecaptchaValidator;
    use crate::config::{Config, RECAPTCHA_KEY_ENV};
    use crate::enrich::Orchestrator;
    use crate::geo::{GeoCityDb, Ip2LocationDb, OfflineGeoLookup, OnlineGeoLookup};
    use crate::health::HealthChecker;
    use crate::initialization::init_client;
    use crate::registry::RdapClient;
    use crate::server::{self, AppState};

    /// Runs the service with the provided configuration.
    ///
    /// Startup opens the geolocation database handles and fails fast if any
    /// cannot be read; request handling never runs against a partially
    /// initialized process. The server then serves until a shutdown signal
    /// arrives, after which the handles are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if a database file cannot be opened, the HTTP client
    /// cannot be built, a CORS origin is malformed, or the listen address
    /// cannot be bound.
    pub async fn run_server(config: Config) -> Result<()> {
        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        let offline: Arc<dyn OfflineGeoLookup> = Arc::new(
            Ip2LocationDb::open(&config.ip2location_v4, &config.ip2location_v6)
                .context("Failed to open IP2Location databases")?,
        );

        let online: Option<Arc<dyn OnlineGeoLookup>> = match &config.geolite2_city {
            Some(path) => {
                let db = GeoCityDb::open(path)
                    .await
                    .context("Failed to open GeoLite2 City database")?;
                Some(Arc::new(db))
            }
            None => {
                info!("GeoLite2 City database not configured; online geolocation disabled");
                None
            }
        };

        let secret = std::env::var(RECAPTCHA_KEY_ENV).unwrap_or_else(|_| {
            log::warn!(
                "{} is not set; captcha verification will reject all requests",
                RECAPTCHA_KEY_ENV
            );
            String::new()
        });

        let captcha = Arc::new(RecaptchaValidator::new(
            Arc::clone(&client),
            config.recaptcha_verify_url.clone(),
            secret,
        ));
        let registry = Arc::new(RdapClient::new(
            Arc::clone(&client),
            config.rdap_endpoint.clone(),
        ));

        let orchestrator = Arc::new(Orchestrator::new(
            captcha,
            registry,
            Arc::clone(&offline),
            online,
        ));
        let health = Arc::new(HealthChecker::new(offline));

        let app = server::router(
            AppState {
                orchestrator,
                health,
            },
            &config.cors_origins,
        )?;

        let listener = tokio::net::TcpListener::bind(&config.listen)
            .await
            .with_context(|| format!("Failed to bind to {}", config.listen))?;
        info!(
            "Listening on http://{}",
            listener
                .local_addr()
                .context("Failed to read local address")?
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        info!("Server stopped; geolocation handles released");
        Ok(())
    }

    async fn shutdown_signal() {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Failed to listen for shutdown signal: {}", e);
            return;
        }
        info!("Shutdown signal received");
    }
}
