use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

use super::errors::ConfigError;

pub const DEFAULT_DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Nameservers used for PTR lookups. Empty means the system resolver
    /// configuration.
    #[serde(default)]
    pub servers: Vec<String>,

    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            servers: Vec::new(),
            query_timeout: default_query_timeout(),
        }
    }
}

impl DnsConfig {
    pub fn uses_system_resolver(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn nameserver_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.servers.iter().map(|s| parse_nameserver(s)).collect()
    }
}

/// Accepts `8.8.8.8`, `8.8.8.8:5353`, `2001:4860::8888` or `[2001:4860::8888]:53`.
pub fn parse_nameserver(server: &str) -> Result<SocketAddr, ConfigError> {
    let server = server.trim();
    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(addr);
    }
    server
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        .map_err(|_| ConfigError::Validation(format!("Invalid DNS server address: {}", server)))
}

fn default_query_timeout() -> u64 {
    5
}
