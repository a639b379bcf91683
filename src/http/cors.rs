//! Cross-origin policy for the dashboard that consumes the API.

use axum::http::{header::InvalidHeaderValue, HeaderName, HeaderValue, Method};
use thiserror::Error;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

#[derive(Debug, Error)]
pub enum CorsError {
    #[error("invalid allowed origin: {0}")]
    Origin(#[from] InvalidHeaderValue),

    #[error("invalid allowed header: {0}")]
    Header(#[from] axum::http::header::InvalidHeaderName),
}

/// Build the CORS layer for the single trusted origin.
///
/// Requests from any other origin get no CORS headers.
pub fn build_cors_layer(config: &CorsConfig) -> Result<CorsLayer, CorsError> {
    let origin = HeaderValue::from_str(&config.allowed_origin)?;
    let headers = config
        .allowed_headers
        .iter()
        .map(|h| HeaderName::from_bytes(h.as_bytes()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([Method::GET, Method::HEAD])
        .allow_headers(AllowHeaders::list(headers))
        .allow_credentials(config.allow_credentials))
}
