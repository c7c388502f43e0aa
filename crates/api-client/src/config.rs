use shared_types::{ApiConfig, AppConfig, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` at the workspace root, baked in at build time so the same
/// settings reach wasm builds that have no filesystem.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Environment variable naming the dispatch API base URL.
pub const API_URL_ENV: &str = "DISPATCH_API_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Parse config file contents. Unparseable input yields all defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse config.toml, using defaults");
        AppConfig::default()
    })
}

/// Parse the embedded config once and keep it for the process lifetime.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(EMBEDDED_CONFIG);
        tracing::info!(features = ?config.features, "loaded front-end config");
        config
    })
}

pub fn feature_flags() -> &'static FeatureFlags {
    &load_config().features
}

/// Pick the base URL: runtime env, then build-time env, then config, then
/// the local default. Blank values are skipped.
pub fn resolve_base_url(
    runtime_env: Option<String>,
    build_env: Option<&str>,
    api: &ApiConfig,
) -> String {
    runtime_env
        .filter(|v| !v.trim().is_empty())
        .or_else(|| build_env.filter(|v| !v.trim().is_empty()).map(str::to_string))
        .or_else(|| api.base_url.clone().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
        .trim()
        .trim_end_matches('/')
        .to_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_api_url() -> Option<String> {
    let _ = dotenvy::dotenv();
    std::env::var(API_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_api_url() -> Option<String> {
    None
}

/// Base URL of the dispatch API for this build.
pub fn api_base_url() -> String {
    resolve_base_url(
        runtime_api_url(),
        option_env!("DISPATCH_API_URL"),
        &load_config().api,
    )
}
