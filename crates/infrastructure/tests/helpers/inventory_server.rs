#![allow(dead_code)]
use axum::body::Bytes;
use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::{oneshot, Mutex};

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[derive(Debug, Clone)]
pub struct UploadPart {
    pub name: String,
    pub file_name: Option<String>,
    pub data: Bytes,
}

#[derive(Debug, Clone)]
pub struct CapturedUpload {
    pub scope: String,
    pub headers: HeaderMap,
    pub parts: Vec<UploadPart>,
}

impl CapturedUpload {
    pub fn part(&self, name: &str) -> Option<&UploadPart> {
        self.parts.iter().find(|p| p.name == name)
    }
}

#[derive(Default)]
struct ServerState {
    search_responses: VecDeque<(u16, String)>,
    upload_status: u16,
    searches: Vec<CapturedRequest>,
    uploads: Vec<CapturedUpload>,
}

/// In-process stand-in for the inventory OpenAPI.
pub struct MockInventoryServer {
    addr: SocketAddr,
    state: Arc<Mutex<ServerState>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockInventoryServer {
    /// `search_responses` are served in order; once exhausted every search
    /// gets an empty last page.
    pub async fn start(search_responses: Vec<(u16, &str)>) -> Self {
        let state = Arc::new(Mutex::new(ServerState {
            search_responses: search_responses
                .into_iter()
                .map(|(status, body)| (status, body.to_string()))
                .collect(),
            upload_status: 200,
            ..Default::default()
        }));

        let app = Router::new()
            .route("/openapi/v1/inventory/search", post(search))
            .route("/openapi/v1/assets/cmdb/upload/{scope}", post(upload))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn set_upload_status(&self, status: u16) {
        self.state.lock().await.upload_status = status;
    }

    pub async fn searches(&self) -> Vec<CapturedRequest> {
        self.state.lock().await.searches.clone()
    }

    pub async fn uploads(&self) -> Vec<CapturedUpload> {
        self.state.lock().await.uploads.clone()
    }
}

impl Drop for MockInventoryServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn search(
    State(state): State<Arc<Mutex<ServerState>>>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let mut state = state.lock().await;
    state.searches.push(CapturedRequest { headers, body });
    let (status, body) = state
        .search_responses
        .pop_front()
        .unwrap_or((200, r#"{"results": []}"#.to_string()));
    (StatusCode::from_u16(status).unwrap(), body)
}

async fn upload(
    State(state): State<Arc<Mutex<ServerState>>>,
    Path(scope): Path<String>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> (StatusCode, String) {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let data = field.bytes().await.unwrap();
        parts.push(UploadPart {
            name,
            file_name,
            data,
        });
    }

    let mut state = state.lock().await;
    state.uploads.push(CapturedUpload {
        scope,
        headers,
        parts,
    });
    let status = state.upload_status;
    (StatusCode::from_u16(status).unwrap(), "{}".to_string())
}
