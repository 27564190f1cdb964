mod hostname_resolver;
mod inventory_client;

pub use hostname_resolver::HostnameResolver;
pub use inventory_client::InventoryClient;
