use thiserror::Error;

/// Discovery errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiscoveryError {
    /// The cluster API list call failed (auth, network, RBAC, unavailable API).
    /// Carries the upstream message verbatim.
    #[error("{0}")]
    ClusterQuery(String),
}

impl From<kube::Error> for DiscoveryError {
    fn from(err: kube::Error) -> Self {
        DiscoveryError::ClusterQuery(err.to_string())
    }
}
