//! Request handlers.

use axum::{extract::State, response::Html, Json};

use crate::discovery::HostSet;
use crate::http::render::render_host_list;
use crate::http::response::{ApiError, HealthStatus};
use crate::http::server::AppState;

/// `GET /api`
pub async fn list_hosts(State(state): State<AppState>) -> Result<Json<HostSet>, ApiError> {
    let hosts = state.discovery.fetch_hosts().await?;
    Ok(Json(hosts))
}

/// `GET /`
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let hosts = state.discovery.fetch_hosts().await?;
    Ok(Html(render_host_list(&hosts)))
}

/// `GET /healthz`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
