//! ptr-sync application layer: ports and the reconciliation use cases.
pub mod ports;
pub mod use_cases;
