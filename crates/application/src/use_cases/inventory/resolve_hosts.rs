use crate::ports::HostnameResolver;
use ptr_sync_domain::{InventoryRecord, ResolvedAnnotation};
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolved subset of one page plus the number of hosts that were skipped.
#[derive(Debug, Default, Clone)]
pub struct ResolveOutcome {
    pub resolved: Vec<ResolvedAnnotation>,
    pub skipped: u64,
}

pub struct ResolveHostsUseCase {
    hostname_resolver: Arc<dyn HostnameResolver>,
}

impl ResolveHostsUseCase {
    pub fn new(hostname_resolver: Arc<dyn HostnameResolver>) -> Self {
        Self { hostname_resolver }
    }

    /// Reverse-resolve a single record. Every failure is a skip.
    pub async fn resolve_host(&self, record: &InventoryRecord) -> Option<ResolvedAnnotation> {
        let ip = match record.parse_ip() {
            Ok(ip) => ip,
            Err(e) => {
                warn!(ip = %record.ip, error = %e, "Couldn't resolve IP");
                return None;
            }
        };

        match self.hostname_resolver.resolve_hostname(ip).await {
            Ok(Some(hostname)) => {
                let hostname = hostname.trim().trim_end_matches('.');
                if hostname.is_empty() {
                    warn!(ip = %ip, "Couldn't resolve IP: empty PTR name");
                    return None;
                }
                debug!(ip = %ip, hostname, "Resolved hostname");
                Some(ResolvedAnnotation::new(record.ip.trim(), hostname))
            }
            Ok(None) => {
                warn!(ip = %ip, "Couldn't resolve IP: no PTR record found");
                None
            }
            Err(e) => {
                warn!(ip = %ip, error = %e, "Couldn't resolve IP");
                None
            }
        }
    }

    pub async fn execute(&self, records: &[InventoryRecord]) -> ResolveOutcome {
        let mut outcome = ResolveOutcome::default();

        for record in records {
            match self.resolve_host(record).await {
                Some(annotation) => outcome.resolved.push(annotation),
                None => outcome.skipped += 1,
            }
        }

        debug!(
            resolved = outcome.resolved.len(),
            skipped = outcome.skipped,
            "Page resolved"
        );
        outcome
    }
}
