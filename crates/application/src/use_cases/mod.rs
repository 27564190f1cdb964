pub mod inventory;

pub use inventory::{ReconcileInventoryUseCase, ResolveHostsUseCase, ResolveOutcome};
