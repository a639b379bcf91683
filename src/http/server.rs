//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (CORS, tracing, request ID)
//! - Serve on a listener until shutdown is signalled

use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::discovery::{DiscoveryService, RouteSource};
use crate::http::cors::{build_cors_layer, CorsError};
use crate::http::handlers::{health, index, list_hosts};
use crate::lifecycle::ShutdownSignal;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub discovery: DiscoveryService,
}

/// HTTP server for the directory.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over the given route source.
    pub fn new(config: &AppConfig, source: Arc<dyn RouteSource>) -> Result<Self, CorsError> {
        // A cluster call past the deadline is a cluster query error.
        let discovery = DiscoveryService::new(source)
            .with_fetch_timeout(Duration::from_secs(config.timeouts.request_secs));
        let state = AppState { discovery };

        let router = Self::build_router(config, state)?;
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Result<Router, CorsError> {
        let cors = build_cors_layer(&config.cors)?;

        Ok(Router::new()
            .route("/", get(index))
            .route("/api", get(list_hosts))
            .route("/healthz", get(health))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(cors))
    }

    /// The configured router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
