use serde::{Deserialize, Serialize};

/// Inventory API connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the cluster, e.g. `https://tetration.example.com`.
    #[serde(default)]
    pub url: String,

    /// JSON file holding `api_key` and `api_secret`.
    #[serde(default = "default_credentials_path")]
    pub credentials_path: String,

    /// Clusters usually ship self-signed certificates, so this stays off
    /// unless asked for.
    #[serde(default)]
    pub verify_tls: bool,

    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            credentials_path: default_credentials_path(),
            verify_tls: false,
            request_timeout: default_request_timeout(),
        }
    }
}

fn default_credentials_path() -> String {
    "api_credentials.json".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
