#![allow(unused_imports)]

pub mod inventory_server;
pub mod ptr_server_mock;

pub use inventory_server::MockInventoryServer;
pub use ptr_server_mock::MockPtrServer;
