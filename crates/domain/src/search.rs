//! Inventory search filter model.
//!
//! Serializes to the JSON filter tree accepted by `/inventory/search`:
//! ```text
//! {"type":"or","filters":[{"type":"eq","field":"hostname","value":""}, ...]}
//! ```

use serde::Serialize;

use crate::PaginationCursor;

/// Prefix the inventory puts in front of user annotation columns.
pub const USER_ANNOTATION_PREFIX: &str = "user_";

pub fn annotation_field(annotation: &str) -> String {
    format!("{}{}", USER_ANNOTATION_PREFIX, annotation)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchFilter {
    Eq { field: String, value: String },
    Or { filters: Vec<SearchFilter> },
    And { filters: Vec<SearchFilter> },
}

impl SearchFilter {
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Hosts with no hostname, or with an empty tracking annotation.
    pub fn unnamed_hosts(annotation: &str) -> Self {
        Self::Or {
            filters: vec![
                Self::eq("hostname", ""),
                Self::eq(annotation_field(annotation), ""),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySearchRequest {
    pub filter: SearchFilter,
    pub scope_name: String,
    pub limit: u32,
    pub offset: String,
}

impl InventorySearchRequest {
    pub fn unnamed_hosts(
        annotation: &str,
        scope_name: &str,
        limit: u32,
        cursor: Option<&PaginationCursor>,
    ) -> Self {
        Self {
            filter: SearchFilter::unnamed_hosts(annotation),
            scope_name: scope_name.to_string(),
            limit,
            offset: cursor.map(|c| c.as_str().to_string()).unwrap_or_default(),
        }
    }
}
