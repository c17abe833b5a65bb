use shared_types::ClientConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable that overrides `[api] base_url`.
pub const API_URL_ENV: &str = "API_URL";

/// Read `config.toml` once, apply the `API_URL` override, and store the result
/// in the global `OnceLock`. Later calls return the same value.
///
/// A missing or unparseable file yields the defaults.
pub fn load_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let config = read_config_file();
        apply_overrides(config, api_url_override())
    })
}

/// Parse a config document, falling back to defaults on error.
pub fn parse_config(contents: &str) -> ClientConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse {CONFIG_PATH}, using defaults");
        ClientConfig::default()
    })
}

/// Apply an environment override to a parsed config. Empty values are ignored.
pub fn apply_overrides(mut config: ClientConfig, api_url: Option<String>) -> ClientConfig {
    if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
        config.api.base_url = url;
    }
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    config
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_file() -> ClientConfig {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_config(&contents);
            tracing::info!(base_url = %config.api.base_url, "Loaded client config");
            config
        }
        Err(e) => {
            tracing::info!(error = %e, "{CONFIG_PATH} not found, using defaults");
            ClientConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_config_file() -> ClientConfig {
    parse_config(include_str!("../../../config.toml"))
}

#[cfg(not(target_arch = "wasm32"))]
fn api_url_override() -> Option<String> {
    let _ = dotenvy::dotenv();
    std::env::var(API_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn api_url_override() -> Option<String> {
    option_env!("API_URL").map(str::to_string)
}
