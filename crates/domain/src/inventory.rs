use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

use crate::DomainError;

/// A host returned by an inventory search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryRecord {
    pub ip: String,
    pub hostname: String,
    pub annotation_value: String,
}

impl InventoryRecord {
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            ..Default::default()
        }
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    pub fn with_annotation(mut self, value: impl Into<String>) -> Self {
        self.annotation_value = value.into();
        self
    }

    pub fn parse_ip(&self) -> Result<IpAddr, DomainError> {
        self.ip
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(self.ip.clone()))
    }

    pub fn is_unnamed(&self) -> bool {
        self.hostname.is_empty() || self.annotation_value.is_empty()
    }
}

/// Hostname learned from a PTR record, ready to be written back as an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAnnotation {
    pub ip: String,
    pub annotation_value: String,
}

impl ResolvedAnnotation {
    pub fn new(ip: impl Into<String>, annotation_value: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            annotation_value: annotation_value.into(),
        }
    }
}

/// Opaque continuation token. An empty token never exists: the API signals
/// the last page by omitting it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaginationCursor(String);

impl PaginationCursor {
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaginationCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InventoryPage {
    pub records: Vec<InventoryRecord>,
    pub next_cursor: Option<PaginationCursor>,
}

impl InventoryPage {
    pub fn new(records: Vec<InventoryRecord>, next_cursor: Option<PaginationCursor>) -> Self {
        Self {
            records,
            next_cursor,
        }
    }

    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }
}

/// Counters collected over one reconciliation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub pages: u64,
    pub hosts_seen: u64,
    pub resolved: u64,
    pub skipped: u64,
    pub uploads_ok: u64,
    pub uploads_failed: u64,
}
