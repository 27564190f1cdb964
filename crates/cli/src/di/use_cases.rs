use super::Services;
use ptr_sync_application::use_cases::{ReconcileInventoryUseCase, ResolveHostsUseCase};
use ptr_sync_domain::Config;
use std::sync::Arc;
use std::time::Duration;

pub struct UseCases {
    pub reconcile: Arc<ReconcileInventoryUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, services: &Services) -> Self {
        let resolve_hosts = Arc::new(ResolveHostsUseCase::new(
            services.hostname_resolver.clone(),
        ));

        Self {
            reconcile: Arc::new(
                ReconcileInventoryUseCase::new(services.inventory.clone(), resolve_hosts)
                    .with_throttle(Duration::from_secs(config.inventory.throttle_secs)),
            ),
        }
    }
}
