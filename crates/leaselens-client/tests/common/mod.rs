//! Mock analysis service for integration tests

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};

/// One multipart field received by the mock
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct ReceivedField {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub size: usize,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<ReceivedField>>>,
}

pub struct MockService {
    pub base_url: String,
    received: Arc<Mutex<Vec<ReceivedField>>>,
}

impl MockService {
    /// Fields received across all uploads so far
    pub fn received(&self) -> Vec<ReceivedField> {
        self.received.lock().unwrap().clone()
    }
}

/// Start a mock service that answers every upload with `status` and `body`
pub async fn spawn_mock(status: StatusCode, body: &str) -> MockService {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status,
        body: body.to_string(),
        received: received.clone(),
    };

    let app = Router::new()
        .route("/", get(health))
        .route("/upload", post(upload))
        .layer(DefaultBodyLimit::disable())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockService {
        base_url: format!("http://{}", addr),
        received,
    }
}

/// A base URL nothing is listening on
#[allow(dead_code)]
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

async fn health(State(state): State<MockState>) -> Response {
    if state.status.is_server_error() {
        return state.status.into_response();
    }
    (
        [(header::CONTENT_TYPE, "application/json")],
        r#"{"status":"healthy","service":"LeaseLens API"}"#,
    )
        .into_response()
}

async fn upload(State(state): State<MockState>, mut multipart: Multipart) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let size = field.bytes().await.map(|b| b.len()).unwrap_or_default();

        state.received.lock().unwrap().push(ReceivedField {
            name,
            file_name,
            content_type,
            size,
        });
    }

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
        .into_response()
}

/// Write a PDF-looking file of exactly `size` bytes
pub fn write_pdf(dir: &Path, name: &str, size: u64) -> PathBuf {
    use std::io::Write;

    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    let header = b"%PDF-1.7\n";
    file.write_all(header).unwrap();
    file.set_len(size.max(header.len() as u64)).unwrap();
    path
}
