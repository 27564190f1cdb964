#![allow(dead_code)]

use async_trait::async_trait;
use ptr_sync_application::ports::{HostnameResolver, InventoryClient};
use ptr_sync_domain::{
    DomainError, InventoryPage, InventoryRecord, PaginationCursor, ResolvedAnnotation,
};
use std::collections::{HashMap, VecDeque};
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub fn make_page(ips: &[&str], next: Option<&str>) -> InventoryPage {
    InventoryPage::new(
        ips.iter().map(|ip| InventoryRecord::new(*ip)).collect(),
        next.and_then(PaginationCursor::new),
    )
}

pub struct MockHostnameResolver {
    responses: Arc<RwLock<HashMap<IpAddr, Result<Option<String>, DomainError>>>>,
    call_count: Arc<AtomicU64>,
}

impl MockHostnameResolver {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn set_response(&self, ip: &str, hostname: Option<&str>) {
        self.responses
            .write()
            .await
            .insert(ip.parse().unwrap(), Ok(hostname.map(|h| h.to_string())));
    }

    pub async fn set_error(&self, ip: &str, error: DomainError) {
        self.responses
            .write()
            .await
            .insert(ip.parse().unwrap(), Err(error));
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl HostnameResolver for MockHostnameResolver {
    async fn resolve_hostname(&self, ip: IpAddr) -> Result<Option<String>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.responses
            .read()
            .await
            .get(&ip)
            .cloned()
            .unwrap_or(Err(DomainError::NxDomain))
    }
}

/// Hands out scripted pages in order and records everything the reconciler
/// sends back.
pub struct MockInventoryClient {
    pages: Arc<RwLock<VecDeque<Result<InventoryPage, DomainError>>>>,
    requested_cursors: Arc<RwLock<Vec<Option<String>>>>,
    published: Arc<RwLock<Vec<Vec<ResolvedAnnotation>>>>,
    publish_should_fail: Arc<RwLock<bool>>,
}

impl MockInventoryClient {
    pub fn with_pages(pages: Vec<InventoryPage>) -> Self {
        Self::with_results(pages.into_iter().map(Ok).collect())
    }

    pub fn with_results(results: Vec<Result<InventoryPage, DomainError>>) -> Self {
        Self {
            pages: Arc::new(RwLock::new(results.into_iter().collect())),
            requested_cursors: Arc::new(RwLock::new(Vec::new())),
            published: Arc::new(RwLock::new(Vec::new())),
            publish_should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn set_publish_should_fail(&self, fail: bool) {
        *self.publish_should_fail.write().await = fail;
    }

    pub async fn requested_cursors(&self) -> Vec<Option<String>> {
        self.requested_cursors.read().await.clone()
    }

    pub async fn published(&self) -> Vec<Vec<ResolvedAnnotation>> {
        self.published.read().await.clone()
    }

    pub async fn fetch_count(&self) -> usize {
        self.requested_cursors.read().await.len()
    }
}

#[async_trait]
impl InventoryClient for MockInventoryClient {
    async fn fetch_unnamed_page(
        &self,
        cursor: Option<&PaginationCursor>,
    ) -> Result<InventoryPage, DomainError> {
        self.requested_cursors
            .write()
            .await
            .push(cursor.map(|c| c.as_str().to_string()));
        self.pages
            .write()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(InventoryPage::default()))
    }

    async fn publish_annotations(
        &self,
        annotations: &[ResolvedAnnotation],
    ) -> Result<(), DomainError> {
        self.published.write().await.push(annotations.to_vec());
        if *self.publish_should_fail.read().await {
            return Err(DomainError::ApiStatus {
                status: 400,
                body: "upload rejected".to_string(),
            });
        }
        Ok(())
    }
}
