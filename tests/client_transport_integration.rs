//! Integration tests for [`ApiClient`] against a local stub HTTP server.
//!
//! These tests pin the transport edge's mandated behaviours: a 401 clears
//! the stored session before the error surfaces, idempotent reads are
//! retried on transport errors, and mutations never are.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use cronobra::auth::{SessionStore, TokenPair, adapters::InMemorySessionStore};
use cronobra::client::{error::ApiError, transport::ApiClient};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;

/// A minimal HTTP server that replays one canned response per connection.
///
/// When `response` is `None` the connection is closed after the request
/// headers arrive without sending anything, which the client observes as a
/// transport error.
struct StubServer {
    base_url: String,
    connections: Arc<AtomicUsize>,
    last_request: Arc<Mutex<String>>,
}

impl StubServer {
    async fn spawn(response: Option<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("stub listener should bind");
        let base_url = format!(
            "http://{}",
            listener.local_addr().expect("stub address should resolve")
        );
        let connections = Arc::new(AtomicUsize::new(0));
        let last_request = Arc::new(Mutex::new(String::new()));

        let counter = Arc::clone(&connections);
        let captured = Arc::clone(&last_request);
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                handle_connection(socket, response.as_deref(), &captured).await;
            }
        });

        Self {
            base_url,
            connections,
            last_request,
        }
    }

    fn connection_count(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }

    async fn last_request(&self) -> String {
        self.last_request.lock().await.clone()
    }
}

async fn handle_connection(
    mut socket: TcpStream,
    response: Option<&str>,
    captured: &Arc<Mutex<String>>,
) {
    let mut raw = Vec::new();
    let mut buffer = [0_u8; 1024];
    while !raw.windows(4).any(|window| window == b"\r\n\r\n") {
        let Ok(read) = socket.read(&mut buffer).await else {
            return;
        };
        if read == 0 {
            break;
        }
        raw.extend_from_slice(&buffer[..read]);
    }
    *captured.lock().await = String::from_utf8_lossy(&raw).into_owned();

    if let Some(body) = response {
        socket
            .write_all(body.as_bytes())
            .await
            .expect("stub response should write");
        socket.shutdown().await.expect("stub socket should close");
    }
}

/// Formats a complete HTTP/1.1 response with a correct content length.
fn http_response(status_line: &str, content_type: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status_line}\r\ncontent-type: {content_type}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    )
}

fn authenticated_session() -> Arc<InMemorySessionStore> {
    let session = Arc::new(InMemorySessionStore::new());
    session
        .save(&TokenPair::new("site-token", "refresh-token"))
        .expect("seeding the session should succeed");
    session
}

#[tokio::test(flavor = "multi_thread")]
async fn unauthorized_response_clears_session_before_surfacing_auth_error() {
    let stub = StubServer::spawn(Some(http_response(
        "401 Unauthorized",
        "text/plain",
        "session stale",
    )))
    .await;
    let session = authenticated_session();
    let client = ApiClient::new(stub.base_url.as_str(), session.clone())
        .expect("client construction should succeed");

    let result = client.get("/tasks").await;

    assert!(
        matches!(result, Err(ApiError::Auth(ref message)) if message == "session stale"),
        "expected Auth error, got: {result:?}"
    );
    assert_eq!(
        session.load().expect("session load should succeed"),
        None,
        "the stored token pair should be cleared on 401"
    );
    // 401 is a response, not a transport failure; it is never retried.
    assert_eq!(stub.connection_count(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn requests_carry_the_stored_bearer_token() {
    let stub = StubServer::spawn(Some(http_response(
        "200 OK",
        "application/json",
        r#"{"accessToken":"abc","currentUser":null}"#,
    )))
    .await;
    let client = ApiClient::new(stub.base_url.as_str(), authenticated_session())
        .expect("client construction should succeed");

    let body = client.get("/auth/me").await.expect("read should succeed");

    assert!(
        stub.last_request()
            .await
            .contains("authorization: Bearer site-token"),
        "the request should carry the stored access token"
    );
    // Response keys arrive in the crate's native casing.
    assert_eq!(body, json!({"access_token": "abc", "current_user": null}));
}

#[tokio::test(flavor = "multi_thread")]
async fn reads_are_retried_on_transport_errors() {
    let stub = StubServer::spawn(None).await;
    let client = ApiClient::new(stub.base_url.as_str(), authenticated_session())
        .expect("client construction should succeed");

    let result = client.get("/tasks").await;

    assert!(
        matches!(result, Err(ApiError::Network(_))),
        "expected Network error, got: {result:?}"
    );
    assert_eq!(
        stub.connection_count(),
        3,
        "a failed read should be attempted three times"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn mutations_are_never_retried() {
    let stub = StubServer::spawn(None).await;
    let client = ApiClient::new(stub.base_url.as_str(), authenticated_session())
        .expect("client construction should succeed");

    let result = client.post("/tasks", json!({"title": "Pour slab"})).await;

    assert!(
        matches!(result, Err(ApiError::Network(_))),
        "expected Network error, got: {result:?}"
    );
    assert_eq!(
        stub.connection_count(),
        1,
        "a failed mutation must not be reissued"
    );
}
