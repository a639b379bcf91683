//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters, gauges, histograms via `metrics`)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - `RUST_LOG` overrides the configured level
//! - Request ID flows through request spans (tower-http)
//! - Metrics are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
