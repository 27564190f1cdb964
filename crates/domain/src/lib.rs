//! ptr-sync domain layer
pub mod config;
pub mod errors;
pub mod inventory;
pub mod search;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use inventory::{
    InventoryPage, InventoryRecord, PaginationCursor, ReconcileSummary, ResolvedAnnotation,
};
pub use search::{InventorySearchRequest, SearchFilter};
