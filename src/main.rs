//! App Directory Server (v1)
//!
//! Lists the URLs exposed by Traefik IngressRoutes in the current cluster.
//!
//! # Architecture Overview
//!
//! ```text
//!   GET /api, GET /
//!        │
//!        ▼
//!   ┌─────────┐     ┌────────────────────┐     ┌──────────────────┐
//!   │  http   │────▶│ DiscoveryService   │────▶│ KubeRouteSource  │──▶ Kubernetes API
//!   │ server  │     │ flatten/parse/dedupe│     │ list ingressroutes│
//!   └─────────┘     └────────────────────┘     └──────────────────┘
//!        │
//!        ▼
//!   {"hosts": [...]} or <ul><li>...</li></ul>
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use app_directory::config::load_from_env;
use app_directory::discovery::KubeRouteSource;
use app_directory::lifecycle::{signals, Shutdown};
use app_directory::observability::{logging, metrics};
use app_directory::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Needed by the Kubernetes TLS client.
    rustls::crypto::ring::default_provider()
        .install_default()
        .ok();

    let config = load_from_env()?;
    logging::init_logging(&config.observability);

    tracing::info!("app-directory v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        group = %config.discovery.group,
        version = %config.discovery.version,
        plural = %config.discovery.plural,
        cors_origin = %config.cors.allowed_origin,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        if let Err(e) = metrics::init_metrics(addr) {
            tracing::error!(error = %e, "Failed to start metrics exporter");
        }
    }

    let source = KubeRouteSource::try_default(&config.discovery).await?;
    tracing::info!("Kubernetes client initialized");

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config, Arc::new(source))?;
    let server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    signals::wait_for_signal().await;
    shutdown.trigger();
    server_task.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}
