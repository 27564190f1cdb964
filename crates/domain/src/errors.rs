use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Inventory API returned HTTP {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("Inventory API request failed: {0}")]
    ApiTransport(String),

    #[error("Invalid inventory API response: {0}")]
    InvalidApiResponse(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Reverse lookup failed: {0}")]
    ResolutionFailed(String),

    #[error("Domain not found (NXDOMAIN)")]
    NxDomain,

    #[error("Reverse lookup timeout")]
    ResolutionTimeout,

    #[error("Invalid API credentials: {0}")]
    Credentials(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("CSV error: {0}")]
    CsvError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Errors that only affect the host being resolved, never the batch.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidIpAddress(_)
                | Self::ResolutionFailed(_)
                | Self::NxDomain
                | Self::ResolutionTimeout
        )
    }

    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            Self::ApiStatus { .. } | Self::ApiTransport(_) | Self::InvalidApiResponse(_)
        )
    }
}
