use async_trait::async_trait;
use ptr_sync_domain::{DomainError, InventoryPage, PaginationCursor, ResolvedAnnotation};

#[async_trait]
pub trait InventoryClient: Send + Sync {
    /// One page of hosts whose hostname or tracking annotation is empty.
    /// `None` requests the first page.
    async fn fetch_unnamed_page(
        &self,
        cursor: Option<&PaginationCursor>,
    ) -> Result<InventoryPage, DomainError>;

    /// Bulk "add" of annotation rows for the configured scope.
    async fn publish_annotations(
        &self,
        annotations: &[ResolvedAnnotation],
    ) -> Result<(), DomainError>;
}
