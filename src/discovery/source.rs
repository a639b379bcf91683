//! Route sources: where IngressRoute snapshots come from.
//!
//! `KubeRouteSource` lists the custom resource from the cluster API through a
//! shared `kube::Client`. `StaticRouteSource` serves a fixed snapshot.

use async_trait::async_trait;
use kube::api::{Api, ApiResource, DynamicObject, ListParams};
use kube::core::GroupVersionKind;
use kube::{Client, ResourceExt};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::DiscoveryConfig;
use crate::discovery::error::DiscoveryError;
use crate::discovery::rule::{IngressRoute, IngressRouteSpec, RouteSpec};

/// Provider of IngressRoute snapshots.
///
/// Implementations must be safe to call from concurrent requests.
#[async_trait]
pub trait RouteSource: Send + Sync {
    /// List every IngressRoute currently visible.
    async fn list_ingress_routes(&self) -> Result<Vec<IngressRoute>, DiscoveryError>;
}

/// Lists IngressRoute objects cluster-wide from the Kubernetes API.
#[derive(Clone)]
pub struct KubeRouteSource {
    api: Api<DynamicObject>,
    resource: ApiResource,
}

impl KubeRouteSource {
    /// Create a source over an existing client.
    pub fn new(client: Client, config: &DiscoveryConfig) -> Self {
        let gvk = GroupVersionKind::gvk(&config.group, &config.version, &config.kind);
        let resource = ApiResource::from_gvk_with_plural(&gvk, &config.plural);
        let api = Api::all_with(client, &resource);

        Self { api, resource }
    }

    /// Create a source using the in-cluster service account or local kubeconfig.
    pub async fn try_default(config: &DiscoveryConfig) -> Result<Self, kube::Error> {
        let client = Client::try_default().await?;
        Ok(Self::new(client, config))
    }

    /// The resource being listed.
    pub fn resource(&self) -> &ApiResource {
        &self.resource
    }
}

#[async_trait]
impl RouteSource for KubeRouteSource {
    async fn list_ingress_routes(&self) -> Result<Vec<IngressRoute>, DiscoveryError> {
        let list = self.api.list(&ListParams::default()).await?;

        debug!(
            group = %self.resource.group,
            version = %self.resource.version,
            plural = %self.resource.plural,
            objects = list.items.len(),
            "Listed custom objects"
        );

        Ok(list.items.into_iter().filter_map(decode_object).collect())
    }
}

/// `spec` as listed, before individual routes are decoded.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListedSpec {
    #[serde(default)]
    entry_points: Option<Vec<String>>,
    #[serde(default)]
    routes: Option<Vec<Value>>,
}

/// Decode one listed object.
///
/// A missing spec, or null `entryPoints`/`routes`, decodes as empty. Route
/// entries are decoded one by one so a malformed entry only drops itself.
/// A spec whose top-level shape is wrong is skipped with a diagnostic.
pub fn decode_object(object: DynamicObject) -> Option<IngressRoute> {
    let name = object.name_any();
    let namespace = object.namespace();

    let listed = match object.data.get("spec") {
        None | Some(Value::Null) => ListedSpec {
            entry_points: None,
            routes: None,
        },
        Some(value) => match ListedSpec::deserialize(value) {
            Ok(listed) => listed,
            Err(e) => {
                debug!(
                    name = %name,
                    namespace = ?namespace,
                    error = %e,
                    "Skipping IngressRoute with malformed spec"
                );
                return None;
            }
        },
    };

    let routes = listed
        .routes
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match RouteSpec::deserialize(&entry) {
            Ok(route) => Some(route),
            Err(e) => {
                debug!(
                    name = %name,
                    namespace = ?namespace,
                    index,
                    error = %e,
                    "Skipping malformed route entry"
                );
                None
            }
        })
        .collect();

    Some(IngressRoute {
        name,
        namespace,
        spec: IngressRouteSpec {
            entry_points: listed.entry_points.unwrap_or_default(),
            routes,
        },
    })
}

/// Serves a fixed snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticRouteSource {
    routes: Vec<IngressRoute>,
}

impl StaticRouteSource {
    pub fn new(routes: Vec<IngressRoute>) -> Self {
        Self { routes }
    }
}

#[async_trait]
impl RouteSource for StaticRouteSource {
    async fn list_ingress_routes(&self) -> Result<Vec<IngressRoute>, DiscoveryError> {
        Ok(self.routes.clone())
    }
}
