//! Axum stub standing in for the Gemini and Graph APIs.
//!
//! Every request is recorded before its canned response is returned, so once a
//! client call has completed the request is visible through `finish`.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }
}

pub struct StubRoute {
    pub path_contains: &'static str,
    pub status: u16,
    pub body: String,
}

impl StubRoute {
    pub fn new(path_contains: &'static str, status: u16, body: impl Into<String>) -> Self {
        Self {
            path_contains,
            status,
            body: body.into(),
        }
    }
}

struct StubState {
    routes: Vec<StubRoute>,
    recorded: Mutex<Vec<RecordedRequest>>,
}

type SharedState = Arc<StubState>;

pub struct StubServer {
    pub base_url: String,
    state: SharedState,
    handle: JoinHandle<std::io::Result<()>>,
}

impl StubServer {
    pub async fn start(routes: Vec<StubRoute>) -> Self {
        let state = Arc::new(StubState {
            routes,
            recorded: Mutex::new(Vec::new()),
        });

        // Gemini puts `:generateContent` inside a path segment, so match on
        // substrings in a fallback instead of declaring routes.
        let app = Router::new()
            .fallback(handle_request)
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move { axum::serve(listener, app).await });

        Self {
            base_url,
            state,
            handle,
        }
    }

    /// Stops the server and returns the requests in arrival order.
    pub async fn finish(self) -> Vec<RecordedRequest> {
        self.handle.abort();
        let recorded = self.state.recorded.lock().unwrap();
        recorded.clone()
    }

    /// Variables pointing both API clients at this server.
    pub fn env(&self, extra: &[(&str, &str)]) -> HashMap<String, String> {
        let mut vars: HashMap<String, String> = [
            ("GEMINI_API_KEY", "test-gemini-key"),
            ("FACEBOOK_PAGE_ID", "12345"),
            ("FACEBOOK_PAGE_ACCESS_TOKEN", "test-page-token"),
        ]
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
        vars.insert(
            "GEMINI_ENDPOINT".to_string(),
            format!("{}/v1beta/models", self.base_url),
        );
        vars.insert(
            "FACEBOOK_GRAPH_URL".to_string(),
            format!("{}/v16.0", self.base_url),
        );
        for (key, value) in extra {
            vars.insert(key.to_string(), value.to_string());
        }
        vars
    }
}

async fn handle_request(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let path = uri.path().to_string();

    let (status, response_body) = state
        .routes
        .iter()
        .find(|route| path.contains(route.path_contains))
        .map(|route| {
            (
                StatusCode::from_u16(route.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                route.body.clone(),
            )
        })
        .unwrap_or((
            StatusCode::NOT_FOUND,
            r#"{"error":{"message":"no stub route"}}"#.to_string(),
        ));

    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    state.recorded.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path,
        headers,
        body: body.to_vec(),
    });

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response_body,
    )
}
