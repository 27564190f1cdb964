use async_trait::async_trait;
use ptr_sync_application::ports::InventoryClient;
use ptr_sync_domain::config::{ApiConfig, InventoryConfig};
use ptr_sync_domain::{
    DomainError, InventoryPage, InventorySearchRequest, PaginationCursor, ResolvedAnnotation,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, Url};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, error};

use super::annotation_csv::write_annotation_file;
use super::credentials::ApiCredentials;
use super::dto::SearchResponse;
use super::multipart::MultipartBody;
use super::signer::{RequestSigner, HEADER_CHECKSUM, HEADER_ID, HEADER_TIMESTAMP};

const API_PREFIX: [&str; 2] = ["openapi", "v1"];
const JSON_CONTENT_TYPE: &str = "application/json";
const CSV_CONTENT_TYPE: &str = "text/csv";
const USER_AGENT: &str = concat!("ptr-sync/", env!("CARGO_PKG_VERSION"));

/// Multipart field selecting the bulk operation of a CMDB upload.
pub const OPERATION_FIELD: &str = "X-Tetration-Oper";
pub const OPERATION_ADD: &str = "add";

/// Signed client for the Tetration inventory and CMDB annotation endpoints.
pub struct TetrationClient {
    http: reqwest::Client,
    base_url: Url,
    signer: RequestSigner,
    annotation: String,
    scope: String,
    search_limit: u32,
    csv_path: PathBuf,
}

impl TetrationClient {
    pub fn new(
        api: &ApiConfig,
        inventory: &InventoryConfig,
        credentials: &ApiCredentials,
    ) -> Result<Self, DomainError> {
        let base_url = Url::parse(api.url.trim())
            .map_err(|e| DomainError::ConfigError(format!("invalid API URL {}: {}", api.url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(DomainError::ConfigError(format!(
                "API URL cannot be used as a base: {}",
                api.url
            )));
        }

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(!api.verify_tls)
            .timeout(Duration::from_secs(api.request_timeout))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DomainError::ApiTransport(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            signer: RequestSigner::new(credentials),
            annotation: inventory.annotation.clone(),
            scope: inventory.scope.clone(),
            search_limit: inventory.search_limit,
            csv_path: PathBuf::from(&inventory.csv_path),
        })
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    /// `<base>/openapi/v1/<segments...>`, each segment percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, DomainError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DomainError::ConfigError("API URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(segments);
        Ok(url)
    }

    async fn signed_post(
        &self,
        url: Url,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<Response, DomainError> {
        let path = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };
        let signed = self.signer.sign("POST", &path, content_type, &body);

        let mut request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .header(HEADER_ID, signed.id)
            .header(HEADER_TIMESTAMP, signed.timestamp)
            .header(reqwest::header::AUTHORIZATION, signed.authorization);
        if let Some(checksum) = signed.checksum {
            request = request.header(HEADER_CHECKSUM, checksum);
        }

        request.body(body).send().await.map_err(|e| {
            DomainError::ApiTransport(format!("POST {} failed: {}", path, e))
        })
    }

    async fn read_body(response: Response) -> Result<String, DomainError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::ApiTransport(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(DomainError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl InventoryClient for TetrationClient {
    async fn fetch_unnamed_page(
        &self,
        cursor: Option<&PaginationCursor>,
    ) -> Result<InventoryPage, DomainError> {
        let request = InventorySearchRequest::unnamed_hosts(
            &self.annotation,
            &self.scope,
            self.search_limit,
            cursor,
        );
        let body = serde_json::to_vec(&request)
            .map_err(|e| DomainError::InvalidApiResponse(e.to_string()))?;
        let url = self.endpoint(&["inventory", "search"])?;

        debug!(url = %url, scope = %self.scope, limit = self.search_limit, "Searching inventory");

        let response = self.signed_post(url, JSON_CONTENT_TYPE, body).await?;
        let text = Self::read_body(response).await.inspect_err(|e| {
            error!(error = %e, "Inventory search rejected");
        })?;

        let parsed: SearchResponse = serde_json::from_str(&text)
            .map_err(|e| DomainError::InvalidApiResponse(e.to_string()))?;
        let page = parsed.into_page(&self.annotation);

        debug!(
            records = page.records.len(),
            has_next = !page.is_last(),
            "Inventory page received"
        );
        Ok(page)
    }

    async fn publish_annotations(
        &self,
        annotations: &[ResolvedAnnotation],
    ) -> Result<(), DomainError> {
        let csv = write_annotation_file(&self.csv_path, &self.annotation, annotations)?;
        let file_name = self
            .csv_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("annotations.csv");

        let form = MultipartBody::new()
            .text(OPERATION_FIELD, OPERATION_ADD)
            .file("file", file_name, CSV_CONTENT_TYPE, &csv);
        let content_type = form.content_type();
        let body = form.finish();

        let url = self.endpoint(&["assets", "cmdb", "upload", &self.scope])?;
        debug!(url = %url, rows = annotations.len(), "Uploading annotations");

        let response = self.signed_post(url, &content_type, body).await?;
        Self::read_body(response).await.map(|_| ())
    }
}
