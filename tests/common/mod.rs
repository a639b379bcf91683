//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use app_directory::config::AppConfig;
use app_directory::discovery::{
    DiscoveryError, IngressRoute, IngressRouteSpec, RouteSource, RouteSpec,
};
use app_directory::{HttpServer, Shutdown};
use async_trait::async_trait;
use tokio::net::TcpListener;

/// Build an IngressRoute with one route per matcher expression.
pub fn ingress_route(name: &str, entry_points: &[&str], matches: &[&str]) -> IngressRoute {
    IngressRoute::new(
        name,
        IngressRouteSpec {
            entry_points: entry_points.iter().map(|s| s.to_string()).collect(),
            routes: matches
                .iter()
                .map(|m| RouteSpec {
                    match_expression: m.to_string(),
                    kind: Some("Rule".into()),
                })
                .collect(),
        },
    )
}

/// A source whose cluster call always fails.
pub struct FailingRouteSource {
    pub message: &'static str,
}

#[async_trait]
impl RouteSource for FailingRouteSource {
    async fn list_ingress_routes(&self) -> Result<Vec<IngressRoute>, DiscoveryError> {
        Err(DiscoveryError::ClusterQuery(self.message.to_string()))
    }
}

/// A source that counts how often it is listed.
#[allow(dead_code)]
pub struct CountingRouteSource {
    pub routes: Vec<IngressRoute>,
    pub calls: AtomicUsize,
}

#[async_trait]
impl RouteSource for CountingRouteSource {
    async fn list_ingress_routes(&self) -> Result<Vec<IngressRoute>, DiscoveryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.routes.clone())
    }
}

/// Start the real server on an ephemeral loopback port.
pub async fn start_server(source: Arc<dyn RouteSource>) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let config = AppConfig::default();
    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config, source).unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
