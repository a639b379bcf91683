//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the directory
//! service. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the directory service.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// CORS policy for the dashboard that consumes the API.
    pub cors: CorsConfig,

    /// Which custom resource to list from the cluster.
    pub discovery: DiscoveryConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Cross-origin policy.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CorsConfig {
    /// The single trusted origin allowed to call the API.
    pub allowed_origin: String,

    /// Request headers the origin may send.
    pub allowed_headers: Vec<String>,

    /// Allow cookies and authorization headers on cross-origin requests.
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "https://cloud.temporal.io".to_string(),
            allowed_headers: vec![
                "x-namespace".to_string(),
                "content-type".to_string(),
                "authorization".to_string(),
            ],
            allow_credentials: true,
        }
    }
}

/// Custom resource coordinates for IngressRoute discovery.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// API group (e.g., "traefik.containo.us").
    pub group: String,

    /// API version within the group.
    pub version: String,

    /// Resource kind.
    pub kind: String,

    /// Plural resource name used in the API path.
    pub plural: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            group: "traefik.containo.us".to_string(),
            version: "v1alpha1".to_string(),
            kind: "IngressRoute".to_string(),
            plural: "ingressroutes".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_traefik_crd() {
        let config = AppConfig::default();
        assert_eq!(config.discovery.group, "traefik.containo.us");
        assert_eq!(config.discovery.version, "v1alpha1");
        assert_eq!(config.discovery.plural, "ingressroutes");
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:8088"

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:8088");
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.cors, CorsConfig::default());
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_traefik_io_group_override() {
        let config: AppConfig = toml::from_str(
            r#"
            [discovery]
            group = "traefik.io"
            "#,
        )
        .unwrap();

        assert_eq!(config.discovery.group, "traefik.io");
        assert_eq!(config.discovery.version, "v1alpha1");
        assert_eq!(config.discovery.kind, "IngressRoute");
    }
}
