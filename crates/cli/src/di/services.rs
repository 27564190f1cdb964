use ptr_sync_application::ports::{HostnameResolver, InventoryClient};
use ptr_sync_domain::Config;
use ptr_sync_infrastructure::inventory::{ApiCredentials, TetrationClient};
use ptr_sync_infrastructure::system::PtrHostnameResolver;
use std::sync::Arc;
use tracing::{error, info};

pub struct Services {
    pub inventory: Arc<dyn InventoryClient>,
    pub hostname_resolver: Arc<dyn HostnameResolver>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let credentials = ApiCredentials::from_file(&config.api.credentials_path).map_err(|e| {
            error!(error = %e, "Failed to load API credentials");
            anyhow::anyhow!(e)
        })?;

        let inventory = TetrationClient::new(&config.api, &config.inventory, &credentials)?;
        info!(
            url = %config.api.url,
            scope = %config.inventory.scope,
            verify_tls = config.api.verify_tls,
            "Inventory client ready"
        );

        let hostname_resolver = PtrHostnameResolver::new(&config.dns)?;
        if config.dns.uses_system_resolver() {
            info!("Using system resolver configuration for PTR lookups");
        } else {
            info!(servers = ?config.dns.servers, "Using configured DNS servers for PTR lookups");
        }

        Ok(Self {
            inventory: Arc::new(inventory),
            hostname_resolver: Arc::new(hostname_resolver),
        })
    }
}
