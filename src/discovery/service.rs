//! Host discovery orchestration.
//!
//! # Responsibilities
//! - Fetch one snapshot from the route source
//! - Flatten, parse and dedupe into a `HostSet`
//! - Record fetch metrics
//!
//! # Design Decisions
//! - Stateless: a fresh fetch per call, no cache
//! - All-or-nothing: a source failure is returned as-is, never a partial set
//! - No retries beyond what the client transport does
//! - A fetch that outlives its deadline is a cluster query failure

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::discovery::error::DiscoveryError;
use crate::discovery::matcher::parse_host;
use crate::discovery::rule::{flatten, IngressRoute};
use crate::discovery::source::RouteSource;
use crate::observability::metrics;

/// Deduplicated scheme-qualified host URLs.
///
/// Uniqueness is exact string equality, so `http://a` and `https://a` are
/// distinct. Iteration is sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HostSet {
    hosts: BTreeSet<String>,
}

impl HostSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set for a snapshot of IngressRoute objects.
    pub fn from_routes(routes: &[IngressRoute]) -> Self {
        flatten(routes).iter().filter_map(parse_host).collect()
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.hosts.contains(url)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.hosts.iter()
    }
}

impl FromIterator<String> for HostSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            hosts: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for HostSet {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.hosts.into_iter()
    }
}

impl<'a> IntoIterator for &'a HostSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.hosts.iter()
    }
}

/// Discovers exposed hosts from a shared route source.
#[derive(Clone)]
pub struct DiscoveryService {
    source: Arc<dyn RouteSource>,
    fetch_timeout: Option<Duration>,
}

impl DiscoveryService {
    pub fn new(source: Arc<dyn RouteSource>) -> Self {
        Self {
            source,
            fetch_timeout: None,
        }
    }

    /// Bound every cluster fetch by `timeout`.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }

    /// Fetch the current snapshot and derive its host set.
    pub async fn fetch_hosts(&self) -> Result<HostSet, DiscoveryError> {
        let start_time = Instant::now();

        let routes = match self.list_routes().await {
            Ok(routes) => routes,
            Err(e) => {
                metrics::record_fetch("error", start_time);
                return Err(e);
            }
        };

        let hosts = HostSet::from_routes(&routes);

        debug!(
            objects = routes.len(),
            hosts = hosts.len(),
            "Discovered hosts"
        );
        metrics::record_fetch("ok", start_time);
        metrics::record_hosts(hosts.len());

        Ok(hosts)
    }

    async fn list_routes(&self) -> Result<Vec<IngressRoute>, DiscoveryError> {
        let Some(limit) = self.fetch_timeout else {
            return self.source.list_ingress_routes().await;
        };

        match tokio::time::timeout(limit, self.source.list_ingress_routes()).await {
            Ok(result) => result,
            Err(_) => Err(DiscoveryError::ClusterQuery(format!(
                "cluster query timed out after {}s",
                limit.as_secs_f64()
            ))),
        }
    }
}
