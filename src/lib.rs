//! App Directory Library
//!
//! Discovers the hosts exposed through Traefik IngressRoutes and serves them
//! as JSON and HTML.

pub mod config;
pub mod discovery;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use discovery::{DiscoveryService, HostSet};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
