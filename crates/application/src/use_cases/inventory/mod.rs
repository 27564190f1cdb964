pub mod reconcile;
pub mod resolve_hosts;

pub use reconcile::ReconcileInventoryUseCase;
pub use resolve_hosts::{ResolveHostsUseCase, ResolveOutcome};
