use async_trait::async_trait;
use ptr_sync_domain::DomainError;
use std::net::IpAddr;

#[async_trait]
pub trait HostnameResolver: Send + Sync {
    /// PTR lookup for `ip`. `Ok(None)` when the lookup succeeded but carried
    /// no PTR answer.
    async fn resolve_hostname(&self, ip: IpAddr) -> Result<Option<String>, DomainError>;
}
