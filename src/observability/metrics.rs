//! Metrics collection and exposition.
//!
//! # Metrics
//! - `directory_fetch_total` (counter): cluster fetches by outcome
//! - `directory_fetch_duration_seconds` (histogram): fetch latency
//! - `directory_hosts` (gauge): hosts in the last successful fetch

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one cluster fetch.
pub fn record_fetch(outcome: &'static str, start_time: Instant) {
    counter!("directory_fetch_total", "outcome" => outcome).increment(1);
    histogram!("directory_fetch_duration_seconds").record(start_time.elapsed().as_secs_f64());
}

pub fn record_hosts(count: usize) {
    gauge!("directory_hosts").set(count as f64);
}
