//! ptr-sync infrastructure: inventory HTTP client and reverse DNS.
pub mod inventory;
pub mod system;
