//! Mock email provider API for testing delivery scenarios
#![allow(dead_code)] // Test utility module - not all methods used in every test
//!
//! The server accepts any method on any path, records what it received and
//! answers with a configurable status code, optionally after a delay.
//!
//! ```rust,no_run
//! use support::MockProviderServer;
//!
//! # async fn example() {
//! let server = MockProviderServer::builder()
//!     .with_status(401, r#"{"message":"invalid key"}"#)
//!     .build()
//!     .await;
//!
//! // Point a provider's base URL at server.base_url()
//! # }
//! ```

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
};
use tokio::{net::TcpListener, sync::RwLock, task::JoinHandle};

/// A request received by the mock provider
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    /// Header value as a string, empty if absent or not ASCII
    #[must_use]
    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    /// Body decoded as UTF-8, lossily
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body parsed as JSON
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }
}

struct MockState {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
    requests: RwLock<Vec<RecordedRequest>>,
}

/// Mock provider server
pub struct MockProviderServer {
    addr: SocketAddr,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl MockProviderServer {
    #[must_use]
    pub fn builder() -> MockProviderServerBuilder {
        MockProviderServerBuilder::default()
    }

    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL to configure as a provider endpoint override
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// All requests received so far
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.read().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.state.requests.read().await.len()
    }
}

impl Drop for MockProviderServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    state.requests.write().await.push(RecordedRequest {
        method,
        path: uri.path().to_owned(),
        headers,
        body,
    });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    (state.status, state.body.clone())
}

/// Builder for [`MockProviderServer`]
pub struct MockProviderServerBuilder {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

impl Default for MockProviderServerBuilder {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            body: r#"{"id":"mock-message-id"}"#.to_owned(),
            delay: None,
        }
    }
}

impl MockProviderServerBuilder {
    /// Respond with `status` and `body` instead of `200 {"id":...}`
    ///
    /// # Panics
    ///
    /// Panics if `status` is not a valid HTTP status code.
    #[must_use]
    pub fn with_status(mut self, status: u16, body: impl Into<String>) -> Self {
        self.status = StatusCode::from_u16(status).expect("valid status code");
        self.body = body.into();
        self
    }

    /// Delay every response, to exercise client timeouts
    #[must_use]
    pub const fn with_response_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Bind to an ephemeral localhost port and start serving
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn build(self) -> MockProviderServer {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock provider");
        let addr = listener.local_addr().expect("local addr");

        let state = Arc::new(MockState {
            status: self.status,
            body: self.body,
            delay: self.delay,
            requests: RwLock::new(Vec::new()),
        });

        let app = Router::new().fallback(record).with_state(Arc::clone(&state));
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        MockProviderServer {
            addr,
            state,
            handle,
        }
    }
}
