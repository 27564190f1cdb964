use serde::{Deserialize, Serialize};
use std::path::Path;

use super::api::ApiConfig;
use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::inventory::InventoryConfig;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_PATH: &str = "ptr-sync.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ptr-sync/config.toml";

/// Main configuration structure, built once at startup and never mutated
/// after validation.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Inventory API endpoint and credentials
    #[serde(default)]
    pub api: ApiConfig,

    /// Search scope, annotation column and paging
    #[serde(default)]
    pub inventory: InventoryConfig,

    /// Reverse lookup settings
    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ptr-sync.toml in current directory
    /// 3. /etc/ptr-sync/config.toml
    /// 4. Default configuration
    ///
    /// Command-line (and environment) overrides are applied on top.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(url) = overrides.url {
            self.api.url = url;
        }
        if let Some(path) = overrides.credentials_path {
            self.api.credentials_path = path;
        }
        if let Some(verify) = overrides.verify_tls {
            self.api.verify_tls = verify;
        }
        if let Some(annotation) = overrides.annotation {
            self.inventory.annotation = annotation;
        }
        if let Some(scope) = overrides.scope {
            self.inventory.scope = scope;
        }
        if let Some(limit) = overrides.search_limit {
            self.inventory.search_limit = limit;
        }
        if let Some(secs) = overrides.throttle_secs {
            self.inventory.throttle_secs = secs;
        }
        if let Some(csv_path) = overrides.csv_path {
            self.inventory.csv_path = csv_path;
        }
        if let Some(servers) = overrides.dns_servers {
            self.dns.servers = servers;
        }
        if let Some(timeout) = overrides.dns_timeout {
            self.dns.query_timeout = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api.url.trim();
        if url.is_empty() {
            return Err(ConfigError::Missing("api.url"));
        }
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Validation(format!(
                "API URL must start with http:// or https://: {}",
                url
            )));
        }

        if self.api.credentials_path.trim().is_empty() {
            return Err(ConfigError::Missing("api.credentials_path"));
        }

        if self.inventory.annotation.trim().is_empty() {
            return Err(ConfigError::Missing("inventory.annotation"));
        }

        if self.inventory.scope.trim().is_empty() {
            return Err(ConfigError::Missing("inventory.scope"));
        }

        if self.inventory.search_limit == 0 {
            return Err(ConfigError::Validation(
                "Search limit must be at least 1".to_string(),
            ));
        }

        if self.dns.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "DNS query timeout must be at least 1 second".to_string(),
            ));
        }

        self.dns.nameserver_addrs()?;

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub url: Option<String>,
    pub credentials_path: Option<String>,
    pub verify_tls: Option<bool>,
    pub annotation: Option<String>,
    pub scope: Option<String>,
    pub search_limit: Option<u32>,
    pub throttle_secs: Option<u64>,
    pub csv_path: Option<String>,
    pub dns_servers: Option<Vec<String>>,
    pub dns_timeout: Option<u64>,
    pub log_level: Option<String>,
}
