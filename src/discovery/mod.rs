//! Route discovery subsystem.
//!
//! # Data Flow
//! ```text
//! RouteSource::list_ingress_routes()     (one cluster snapshot)
//!     → rule.rs (flatten routes into RouteRule records)
//!     → matcher.rs (recover host, classify by entry point)
//!     → service.rs (dedupe into HostSet)
//!     → Return: HostSet or DiscoveryError
//! ```
//!
//! # Design Decisions
//! - Every request performs its own fresh fetch; nothing is cached
//! - Rules without a host or a public entry point are skipped, never errors
//! - A failed fetch fails the whole request (no partial host lists)
//! - Only the first `Host(...)` term of an expression is honored

pub mod error;
pub mod matcher;
pub mod rule;
pub mod service;
pub mod source;

pub use error::DiscoveryError;
pub use matcher::parse_host;
pub use rule::{flatten, IngressRoute, IngressRouteSpec, RouteRule, RouteSpec};
pub use service::{DiscoveryService, HostSet};
pub use source::{KubeRouteSource, RouteSource, StaticRouteSource};
