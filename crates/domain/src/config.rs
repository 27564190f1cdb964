pub mod api;
pub mod dns;
pub mod errors;
pub mod inventory;
pub mod logging;
pub mod root;

pub use api::ApiConfig;
pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use inventory::InventoryConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
