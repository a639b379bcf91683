//! Response types and error mapping.
//!
//! # Design Decisions
//! - Every failure is a JSON `{"error": ...}` body, even on the HTML page
//! - Cluster failures are 500 with the upstream message

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::discovery::DiscoveryError;

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Liveness body.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// Handler error.
#[derive(Debug)]
pub struct ApiError(pub DiscoveryError);

impl From<DiscoveryError> for ApiError {
    fn from(err: DiscoveryError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Cluster query failed");

        let status = match self.0 {
            DiscoveryError::ClusterQuery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
