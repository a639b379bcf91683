//! Configuration loading from disk and the process environment.

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Names an optional TOML file to load.
pub const CONFIG_PATH_ENV: &str = "APP_DIRECTORY_CONFIG";
/// Overrides the listener port.
pub const PORT_ENV: &str = "PORT";
/// Overrides the trusted CORS origin.
pub const CORS_ORIGIN_ENV: &str = "APP_DIRECTORY_CORS_ORIGIN";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value {value:?} for {key}")]
    InvalidEnv { key: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Build the process configuration.
///
/// Reads the file named by `APP_DIRECTORY_CONFIG` when set, falls back to
/// defaults otherwise, then applies environment overrides and validates.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    let mut config = match env::var(CONFIG_PATH_ENV) {
        Ok(path) => {
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content)?
        }
        Err(_) => AppConfig::default(),
    };

    apply_env_overrides(&mut config, |key| env::var(key).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup(PORT_ENV) {
        let port: u16 = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
            key: PORT_ENV,
            value: port.clone(),
        })?;

        // An unparsable bind address is left for validation to report.
        if let Ok(mut addr) = config.listener.bind_address.parse::<SocketAddr>() {
            addr.set_port(port);
            config.listener.bind_address = addr.to_string();
        }
    }

    if let Some(origin) = lookup(CORS_ORIGIN_ENV) {
        config.cors.allowed_origin = origin;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_port_override() {
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config, lookup_from(&[("PORT", "8081")])).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8081");
    }

    #[test]
    fn test_unset_env_keeps_default_port() {
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config, lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_port_rejected() {
        let mut config = AppConfig::default();
        let err = apply_env_overrides(&mut config, lookup_from(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { key: "PORT", .. }));
    }

    #[test]
    fn test_cors_origin_override() {
        let mut config = AppConfig::default();
        apply_env_overrides(
            &mut config,
            lookup_from(&[("APP_DIRECTORY_CORS_ORIGIN", "https://dash.example.com")]),
        )
        .unwrap();
        assert_eq!(config.cors.allowed_origin, "https://dash.example.com");
    }

    #[test]
    fn test_load_config_from_file() {
        let path = env::temp_dir().join(format!("app-directory-{}.toml", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[timeouts]\nrequest_secs = 5").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.timeouts.request_secs, 5);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_config_reports_validation() {
        let path = env::temp_dir().join(format!("app-directory-bad-{}.toml", std::process::id()));
        fs::write(&path, "[timeouts]\nrequest_secs = 0\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("request_secs"));

        fs::remove_file(&path).unwrap();
    }
}
