use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::TokioAsyncResolver;
use ptr_sync_application::ports::HostnameResolver;
use ptr_sync_domain::config::DnsConfig;
use ptr_sync_domain::DomainError;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

/// PTR lookups through hickory, either with the system resolver
/// configuration or with the configured nameservers.
pub struct PtrHostnameResolver {
    resolver: TokioAsyncResolver,
}

impl PtrHostnameResolver {
    pub fn new(config: &DnsConfig) -> Result<Self, DomainError> {
        let timeout = Duration::from_secs(config.query_timeout);

        let resolver = if config.uses_system_resolver() {
            let (resolver_config, mut opts) = hickory_resolver::system_conf::read_system_conf()
                .map_err(|e| {
                    DomainError::ConfigError(format!("cannot read system resolver config: {}", e))
                })?;
            opts.timeout = timeout;
            TokioAsyncResolver::tokio(resolver_config, opts)
        } else {
            let addrs = config
                .nameserver_addrs()
                .map_err(|e| DomainError::ConfigError(e.to_string()))?;
            let mut resolver_config = ResolverConfig::new();
            for addr in addrs {
                resolver_config.add_name_server(NameServerConfig::new(addr, Protocol::Udp));
                resolver_config.add_name_server(NameServerConfig::new(addr, Protocol::Tcp));
            }
            let mut opts = ResolverOpts::default();
            opts.timeout = timeout;
            TokioAsyncResolver::tokio(resolver_config, opts)
        };

        Ok(Self { resolver })
    }

    pub fn ip_to_reverse_domain(ip: &IpAddr) -> String {
        match ip {
            IpAddr::V4(ipv4) => {
                let octets = ipv4.octets();
                format!(
                    "{}.{}.{}.{}.in-addr.arpa",
                    octets[3], octets[2], octets[1], octets[0]
                )
            }
            IpAddr::V6(ipv6) => {
                let nibbles: Vec<String> = ipv6
                    .octets()
                    .iter()
                    .rev()
                    .flat_map(|byte| [byte & 0x0f, (byte >> 4) & 0x0f])
                    .map(|nibble| format!("{:x}", nibble))
                    .collect();
                format!("{}.ip6.arpa", nibbles.join("."))
            }
        }
    }
}

/// `Ok(None)` for an answer without PTR data, an error for everything that
/// prevented an answer.
pub fn classify_resolve_error(error: &ResolveError) -> Result<Option<String>, DomainError> {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            if *response_code == ResponseCode::NXDomain {
                Err(DomainError::NxDomain)
            } else {
                Ok(None)
            }
        }
        ResolveErrorKind::Timeout => Err(DomainError::ResolutionTimeout),
        _ => Err(DomainError::ResolutionFailed(error.to_string())),
    }
}

#[async_trait]
impl HostnameResolver for PtrHostnameResolver {
    async fn resolve_hostname(&self, ip: IpAddr) -> Result<Option<String>, DomainError> {
        debug!(
            ip = %ip,
            reverse_domain = %Self::ip_to_reverse_domain(&ip),
            "Performing PTR lookup"
        );

        match self.resolver.reverse_lookup(ip).await {
            Ok(lookup) => {
                let hostname = lookup.iter().next().map(|name| name.to_utf8());
                match &hostname {
                    Some(name) => debug!(ip = %ip, hostname = %name, "PTR lookup successful"),
                    None => debug!(ip = %ip, "PTR lookup returned no records"),
                }
                Ok(hostname)
            }
            Err(e) => {
                debug!(ip = %ip, error = %e, "PTR lookup failed");
                classify_resolve_error(&e)
            }
        }
    }
}
