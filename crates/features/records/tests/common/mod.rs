#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use eshare_records::ShareClient;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::runtime::Runtime;

/// Token written to the token file, surrounded by whitespace the client must strip.
pub const TOKEN: &str = "mock-token";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn token(&self) -> Option<&str> {
        self.query.get("access_token").map(String::as_str)
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

#[derive(Debug, Clone)]
struct Reply {
    status: StatusCode,
    body: Option<Value>,
}

#[derive(Debug, Default)]
struct MockState {
    routes: HashMap<(String, String), Reply>,
    requests: Vec<RecordedRequest>,
}

type SharedState = Arc<Mutex<MockState>>;

/// In-process stand-in for a repository instance.
///
/// Replies are canned per method and path; anything else gets the repository's 404 body.
/// Every request is recorded, including ones that hit no route.
pub struct MockRepository {
    state: SharedState,
    base_url: String,
    token_dir: TempDir,
    // Dropping the runtime stops the server.
    _runtime: Runtime,
}

impl MockRepository {
    pub fn start() -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("failed to build runtime");

        let state = SharedState::default();
        let app = Router::new().fallback(dispatch).with_state(state.clone());

        let listener = runtime
            .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
            .expect("failed to bind mock repository");
        let addr = listener.local_addr().expect("no local address");
        runtime.spawn(async move {
            axum::serve(listener, app).await.expect("mock repository stopped");
        });

        let token_dir = tempfile::tempdir().expect("failed to create token dir");
        std::fs::write(token_dir.path().join("token.txt"), format!("  {TOKEN}\n"))
            .expect("failed to write token file");

        Self { state, base_url: format!("http://{addr}"), token_dir, _runtime: runtime }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token_file(&self) -> PathBuf {
        self.token_dir.path().join("token.txt")
    }

    pub fn client(&self) -> ShareClient {
        ShareClient::builder()
            .base_url(&self.base_url)
            .token_file(self.token_file())
            .community_id("ecas-community")
            .page_size(10)
            .build()
            .expect("failed to build client")
    }

    pub fn reply(&self, method: &str, path: &str, status: u16, body: Value) {
        self.insert(method, path, status, Some(body));
    }

    pub fn reply_empty(&self, method: &str, path: &str, status: u16) {
        self.insert(method, path, status, None);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {requests:#?}");
        requests.into_iter().next().unwrap()
    }

    fn insert(&self, method: &str, path: &str, status: u16, body: Option<Value>) {
        let status = StatusCode::from_u16(status).expect("invalid status");
        self.state
            .lock()
            .unwrap()
            .routes
            .insert((method.to_owned(), path.to_owned()), Reply { status, body });
    }
}

async fn dispatch(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let mut state = state.lock().unwrap();
    state.requests.push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_owned(),
        query,
        content_type: headers
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        body: body.to_vec(),
    });

    match state.routes.get(&(method.to_string(), uri.path().to_owned())) {
        Some(Reply { status, body: Some(body) }) => (*status, Json(body.clone())).into_response(),
        Some(Reply { status, body: None }) => (*status).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "status": 404,
                "message": "The requested URL was not found on the server."
            })),
        )
            .into_response(),
    }
}
