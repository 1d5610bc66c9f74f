//! HTTP transport with bearer auth, casing transform, and 401 handling.

use crate::auth::SessionStore;
use crate::client::casing::{keys_to_camel, keys_to_snake};
use crate::client::error::{ApiError, ApiResult};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Default bound on every request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Idempotent reads are retried this many times on transport errors.
const READ_ATTEMPTS: u32 = 3;

/// Base delay between read retries, doubled per attempt.
const RETRY_BACKOFF: Duration = Duration::from_millis(250);

/// HTTP edge of the client stack.
///
/// Every request carries the stored bearer token. JSON request bodies are
/// rewritten snake→camel and response bodies camel→snake, so the rest of
/// the client only ever sees the crate's native casing; multipart bodies
/// pass through untouched. Any 401 clears the session before the error is
/// surfaced, and mutations are never retried.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Creates a client for a backend base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when the underlying HTTP client cannot
    /// be constructed.
    pub fn new(base_url: impl Into<String>, session: Arc<dyn SessionStore>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            session,
        })
    }

    /// Returns the session store this transport authenticates from.
    #[must_use]
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Issues a GET, retried with backoff on transport errors.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the taxonomy; [`ApiError::Network`] only
    /// after all attempts failed.
    pub async fn get(&self, path: &str) -> ApiResult<Value> {
        let mut delay = RETRY_BACKOFF;
        let mut attempt = 1;
        loop {
            match self.send(Method::GET, path, None).await {
                Err(ApiError::Network(err)) if attempt < READ_ATTEMPTS => {
                    tracing::warn!(%path, attempt, error = %err, "read failed, retrying");
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    /// Issues a POST with a JSON body. Never retried.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the taxonomy.
    pub async fn post(&self, path: &str, body: Value) -> ApiResult<Value> {
        self.send(Method::POST, path, Some(body)).await
    }

    /// Issues a PATCH with a JSON body. Never retried.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the taxonomy.
    pub async fn patch(&self, path: &str, body: Value) -> ApiResult<Value> {
        self.send(Method::PATCH, path, Some(body)).await
    }

    /// Issues a DELETE. Never retried.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the taxonomy.
    pub async fn delete(&self, path: &str) -> ApiResult<Value> {
        self.send(Method::DELETE, path, None).await
    }

    /// Issues a multipart POST. The form passes through without casing
    /// transformation; the JSON response is still rewritten camel→snake.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] per the taxonomy.
    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ApiResult<Value> {
        let request = self
            .authorized(self.http.request(Method::POST, self.url(path)))?
            .multipart(form);
        self.dispatch(request).await
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> ApiResult<Value> {
        let mut request = self.authorized(self.http.request(method, self.url(path)))?;
        if let Some(body) = body {
            request = request.json(&keys_to_camel(body));
        }
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: RequestBuilder) -> ApiResult<Value> {
        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            // Mandated side effect: a dead session never lingers.
            self.session.clear()?;
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Auth(message));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), message));
        }
        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }
        let body = response.json::<Value>().await?;
        Ok(keys_to_snake(body))
    }

    fn authorized(&self, request: RequestBuilder) -> ApiResult<RequestBuilder> {
        match self.session.load()? {
            Some(tokens) if !tokens.access_token.is_empty() => {
                Ok(request.bearer_auth(tokens.access_token))
            }
            _ => Ok(request),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
