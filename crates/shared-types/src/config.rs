use serde::{Deserialize, Serialize};

/// Default REST base URL when neither the config file nor the environment
/// provides one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Name of the single persistent slot holding the bearer credential.
pub const CREDENTIAL_STORAGE_KEY: &str = "jwt_token";

/// `[api]` section of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// `[storage]` section of `config.toml`. Only native builds read it; the
/// browser build keeps the credential in `localStorage`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StorageSettings {
    /// Directory for the credential file. Unset means the working directory.
    #[serde(default)]
    pub data_dir: Option<String>,
}

/// Top-level client config file structure matching `config.toml`.
///
/// Every section defaults so that a missing or partial file still yields a
/// usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: ClientConfig = toml::from_str(
            r#"
            [storage]
            data_dir = "/var/lib/eva"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.storage.data_dir.as_deref(), Some("/var/lib/eva"));
    }

    #[test]
    fn base_url_is_read_from_api_section() {
        let config: ClientConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://eva.example/api/v1"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://eva.example/api/v1");
    }
}
