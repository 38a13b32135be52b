//! HTTP client with buffered, best-effort-JSON responses
//!
//! Every integration goes through [`HttpClient`]. One call issues exactly
//! one request: the sync design has no automatic retry at any layer, so a
//! failed request surfaces immediately at its call site.

use std::time::Duration;

use notebridge_domain::constants::REQUEST_TIMEOUT_SECS;
use notebridge_domain::{NoteBridgeError, Result};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Thin wrapper over a shared `reqwest` client
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the request once and buffer the response
    ///
    /// A network-level failure (no response at all) maps to
    /// [`NoteBridgeError::Network`]; any received status, success or not, is
    /// returned to the caller for interpretation.
    pub async fn send(&self, builder: RequestBuilder) -> Result<ApiResponse> {
        let request = builder.build().map_err(|err| {
            NoteBridgeError::Internal(format!("failed to build HTTP request: {err}"))
        })?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        let response = self.client.execute(request).await.map_err(|err| {
            NoteBridgeError::Network(format!("HTTP request to {url} failed: {err}"))
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|err| {
            NoteBridgeError::Network(format!("failed to read response body from {url}: {err}"))
        })?;
        debug!(%method, %url, %status, "received HTTP response");

        let body = match serde_json::from_str::<Value>(&text) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(text),
        };

        Ok(ApiResponse { status, body })
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS), user_agent: None }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| {
            NoteBridgeError::Internal(format!("failed to build HTTP client: {err}"))
        })?;

        Ok(HttpClient { client })
    }
}

/// Buffered response with a best-effort-parsed body
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: ResponseBody,
}

/// Response body: JSON when it parses, raw text otherwise
#[derive(Debug, Clone)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ApiResponse {
    /// Whether the status is in `[200, 300)`
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Deserialize the JSON body into a typed structure
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        match &self.body {
            ResponseBody::Json(value) => serde_json::from_value(value.clone()).map_err(|err| {
                NoteBridgeError::Internal(format!("unexpected response shape: {err}"))
            }),
            ResponseBody::Text(_) => Err(NoteBridgeError::Internal(
                "expected a JSON response body".to_string(),
            )),
        }
    }

    /// Render the body for error messages and logs
    #[must_use]
    pub fn body_display(&self) -> String {
        match &self.body {
            ResponseBody::Json(value) => value.to_string(),
            ResponseBody::Text(text) => text.clone(),
        }
    }
}
