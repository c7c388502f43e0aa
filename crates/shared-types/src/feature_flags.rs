use serde::{Deserialize, Serialize};

/// Feature flags controlling optional front-end behavior.
///
/// Read from `config.toml`. Every field defaults to `false` so that a
/// missing or incomplete config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Log every request and response line at debug level.
    #[serde(default)]
    pub request_logging: bool,
    /// Render the Leaflet map on the driver dashboard.
    #[serde(default)]
    pub map: bool,
}

/// `[api]` section of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the dispatch API. `DISPATCH_API_URL` takes precedence.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Per-request timeout in seconds (native builds only).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub api: ApiConfig,
}
