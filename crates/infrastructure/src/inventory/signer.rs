//! HMAC request signing for the inventory OpenAPI.
//!
//! Every request is signed over:
//! ```text
//! <METHOD>\n<path[?query]>\n<sha256 hex of body, POST/PUT only>\n<Content-Type>\n<Timestamp>\n
//! ```
//! and the base64 HMAC-SHA256 digest goes into `Authorization`.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};
use ring::hmac;
use sha2::{Digest, Sha256};

use super::credentials::ApiCredentials;

pub const HEADER_ID: &str = "Id";
pub const HEADER_TIMESTAMP: &str = "Timestamp";
pub const HEADER_CHECKSUM: &str = "X-Tetration-Cksum";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S+0000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub id: String,
    pub timestamp: String,
    pub checksum: Option<String>,
    pub authorization: String,
}

pub struct RequestSigner {
    api_key: String,
    key: hmac::Key,
}

impl RequestSigner {
    pub fn new(credentials: &ApiCredentials) -> Self {
        Self {
            api_key: credentials.api_key.clone(),
            key: hmac::Key::new(hmac::HMAC_SHA256, credentials.api_secret.as_bytes()),
        }
    }

    pub fn sign(
        &self,
        method: &str,
        path: &str,
        content_type: &str,
        body: &[u8],
    ) -> SignedHeaders {
        self.sign_at(method, path, content_type, body, Utc::now())
    }

    pub fn sign_at(
        &self,
        method: &str,
        path: &str,
        content_type: &str,
        body: &[u8],
        now: DateTime<Utc>,
    ) -> SignedHeaders {
        let method = method.to_ascii_uppercase();
        let timestamp = now.format(TIMESTAMP_FORMAT).to_string();
        let checksum = matches!(method.as_str(), "POST" | "PUT").then(|| body_checksum(body));

        let message = format!(
            "{}\n{}\n{}\n{}\n{}\n",
            method,
            path,
            checksum.as_deref().unwrap_or(""),
            content_type,
            timestamp
        );
        let tag = hmac::sign(&self.key, message.as_bytes());

        SignedHeaders {
            id: self.api_key.clone(),
            timestamp,
            checksum,
            authorization: STANDARD.encode(tag.as_ref()),
        }
    }
}

pub fn body_checksum(body: &[u8]) -> String {
    format!("{:x}", Sha256::digest(body))
}
