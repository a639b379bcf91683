//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! APP_DIRECTORY_CONFIG (optional TOML file)
//!     → loader.rs (parse & deserialize, apply env overrides)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → handed to HttpServer and the discovery source at startup
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the service runs with no file at all
//! - Environment overrides (`PORT`, `APP_DIRECTORY_CORS_ORIGIN`) win over the file
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_from_env, ConfigError};
pub use schema::AppConfig;
pub use schema::CorsConfig;
pub use schema::DiscoveryConfig;
pub use schema::ListenerConfig;
pub use schema::LogFormat;
pub use schema::ObservabilityConfig;
pub use schema::TimeoutConfig;
