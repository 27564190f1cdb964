use super::ResolveHostsUseCase;
use crate::ports::InventoryClient;
use ptr_sync_domain::{DomainError, PaginationCursor, ReconcileSummary};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

const DEFAULT_THROTTLE: Duration = Duration::from_secs(2);

/// Fetch → resolve → publish → advance, until the inventory stops handing
/// out cursors.
pub struct ReconcileInventoryUseCase {
    inventory: Arc<dyn InventoryClient>,
    resolve_hosts: Arc<ResolveHostsUseCase>,
    throttle: Duration,
}

impl ReconcileInventoryUseCase {
    pub fn new(inventory: Arc<dyn InventoryClient>, resolve_hosts: Arc<ResolveHostsUseCase>) -> Self {
        Self {
            inventory,
            resolve_hosts,
            throttle: DEFAULT_THROTTLE,
        }
    }

    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }

    /// A failed fetch aborts the run. A failed upload is logged and the next
    /// page is still processed.
    pub async fn execute(&self) -> Result<ReconcileSummary, DomainError> {
        let mut summary = ReconcileSummary::default();
        let mut cursor: Option<PaginationCursor> = None;
        let mut seen: HashSet<PaginationCursor> = HashSet::new();

        loop {
            info!(
                offset = cursor.as_ref().map(PaginationCursor::as_str).unwrap_or(""),
                "Getting inventory page"
            );

            let page = self
                .inventory
                .fetch_unnamed_page(cursor.as_ref())
                .await
                .inspect_err(|e| error!(error = %e, "Inventory search failed, aborting"))?;

            summary.pages += 1;
            summary.hosts_seen += page.records.len() as u64;

            let outcome = self.resolve_hosts.execute(&page.records).await;
            summary.resolved += outcome.resolved.len() as u64;
            summary.skipped += outcome.skipped;

            if outcome.resolved.is_empty() {
                debug!("No resolved hosts on this page, nothing to upload");
            } else {
                match self.inventory.publish_annotations(&outcome.resolved).await {
                    Ok(()) => {
                        summary.uploads_ok += 1;
                        info!(
                            count = outcome.resolved.len(),
                            "Successfully posted annotations"
                        );
                    }
                    Err(e) => {
                        summary.uploads_failed += 1;
                        error!(error = %e, "Error posting annotations");
                    }
                }
            }

            let next = match page.next_cursor {
                Some(next) => next,
                None => break,
            };

            if let Some(current) = cursor.take() {
                seen.insert(current);
            }
            if seen.contains(&next) {
                warn!(offset = %next, "Inventory returned an offset that was already visited, stopping");
                break;
            }
            cursor = Some(next);

            if !self.throttle.is_zero() {
                tokio::time::sleep(self.throttle).await;
            }
        }

        info!(
            pages = summary.pages,
            hosts = summary.hosts_seen,
            resolved = summary.resolved,
            skipped = summary.skipped,
            uploads_ok = summary.uploads_ok,
            uploads_failed = summary.uploads_failed,
            "Reconciliation finished"
        );

        Ok(summary)
    }
}
