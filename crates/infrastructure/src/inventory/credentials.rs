use ptr_sync_domain::DomainError;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// API key pair downloaded from the cluster UI (`api_credentials.json`).
#[derive(Clone, Deserialize)]
pub struct ApiCredentials {
    pub api_key: String,
    pub api_secret: String,
}

impl ApiCredentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Credentials(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
            .map_err(|e| DomainError::Credentials(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(contents: &str) -> Result<Self, DomainError> {
        let credentials: Self = serde_json::from_str(contents)
            .map_err(|e| DomainError::Credentials(e.to_string()))?;
        if credentials.api_key.trim().is_empty() || credentials.api_secret.trim().is_empty() {
            return Err(DomainError::Credentials(
                "api_key and api_secret must not be empty".to_string(),
            ));
        }
        Ok(credentials)
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
