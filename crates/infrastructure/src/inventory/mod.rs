pub mod annotation_csv;
pub mod client;
pub mod credentials;
pub mod dto;
pub mod multipart;
pub mod signer;

pub use client::TetrationClient;
pub use credentials::ApiCredentials;
