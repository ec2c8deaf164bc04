//! HTTP routing and CORS.
//!
//! Three endpoints: the lookup itself, a health probe over the geolocation
//! handles, and a header echo used by the frontend for connection debugging.

mod handlers;
mod types;

pub use types::{AppState, HealthResponse, LookupResponse, ResponseStatus};

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use handlers::{headers_handler, health_handler, whois_handler};

/// Builds the application router.
///
/// With no configured origins the CORS layer is permissive (development
/// setup); otherwise only the listed origins are allowed.
pub fn router(state: AppState, cors_origins: &[String]) -> Result<Router, anyhow::Error> {
    let cors = cors_layer(cors_origins)?;

    Ok(Router::new()
        .route("/whois", post(whois_handler))
        .route("/health", get(health_handler))
        .route("/headers", get(headers_handler))
        .layer(cors)
        .with_state(state))
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer, anyhow::Error> {
    if origins.is_empty() {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any));
    }

    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| anyhow::anyhow!("Invalid CORS origin {:?}: {}", origin, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
