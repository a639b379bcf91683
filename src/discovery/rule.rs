//! IngressRoute shapes and flattening into routing rules.

use serde::{Deserialize, Serialize};

/// One IngressRoute object as listed from the cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngressRoute {
    /// Object name (for logging).
    pub name: String,

    /// Object namespace.
    pub namespace: Option<String>,

    pub spec: IngressRouteSpec,
}

/// The parts of `spec` this service reads.
///
/// Missing fields decode as empty so an object without routes or entry
/// points simply contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IngressRouteSpec {
    /// Entry points shared by every route in the object.
    pub entry_points: Vec<String>,

    pub routes: Vec<RouteSpec>,
}

/// A single entry of `spec.routes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteSpec {
    /// Traefik matcher expression, e.g. ``Host(`a.example.com`) && PathPrefix(`/v1`)``.
    #[serde(rename = "match")]
    pub match_expression: String,

    /// Route kind (always "Rule" in practice).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A matcher expression paired with the entry points it is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    pub match_expression: String,
    pub entry_points: Vec<String>,
}

impl RouteRule {
    pub fn new<I, S>(match_expression: impl Into<String>, entry_points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            match_expression: match_expression.into(),
            entry_points: entry_points.into_iter().map(Into::into).collect(),
        }
    }
}

impl IngressRoute {
    pub fn new(name: impl Into<String>, spec: IngressRouteSpec) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            spec,
        }
    }

    /// Rules for every route in this object.
    ///
    /// Entry points live on the object, so every route shares them.
    pub fn rules(&self) -> impl Iterator<Item = RouteRule> + '_ {
        self.spec.routes.iter().map(|route| RouteRule {
            match_expression: route.match_expression.clone(),
            entry_points: self.spec.entry_points.clone(),
        })
    }
}

/// Flatten a snapshot of objects into one rule per route.
pub fn flatten(routes: &[IngressRoute]) -> Vec<RouteRule> {
    routes.iter().flat_map(IngressRoute::rules).collect()
}
