//! Tenant access token provider
//!
//! Exchanges the application id/secret pair for a short-lived tenant access
//! token and caches it in process memory. The cached expiry already subtracts
//! a 5-minute safety margin, so a cache hit is always safe to use.
//!
//! The process performs calls strictly sequentially, so the cache needs no
//! single-flight protection; a concurrent caller would have to add it to
//! avoid duplicate exchanges.

use std::sync::Arc;
use std::time::{Duration, Instant};

use notebridge_common::time::{Clock, SystemClock};
use notebridge_domain::constants::TOKEN_REFRESH_MARGIN_SECS;
use notebridge_domain::{FeishuConfig, NoteBridgeError, Result};
use reqwest::Method;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::types::{TokenRequest, TokenResponse};
use crate::http::HttpClient;

struct CachedToken {
    token: String,
    expires_at: Instant,
}

/// Caching provider for the destination's bearer token
pub struct TenantTokenProvider {
    http: HttpClient,
    endpoint: String,
    app_id: String,
    app_secret: String,
    clock: Arc<dyn Clock>,
    cached: RwLock<Option<CachedToken>>,
}

impl TenantTokenProvider {
    /// Create a provider using the system clock
    pub fn new(config: &FeishuConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a provider with an injected clock (tests use `MockClock`)
    pub fn with_clock(config: &FeishuConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new()?,
            endpoint: format!(
                "{}/auth/v3/tenant_access_token/internal",
                config.base_url.trim_end_matches('/')
            ),
            app_id: config.app_id.clone(),
            app_secret: config.app_secret.clone(),
            clock,
            cached: RwLock::new(None),
        })
    }

    /// Return a valid bearer token, exchanging credentials only when the
    /// cached token is missing or past its margin-adjusted expiry
    ///
    /// # Errors
    /// Returns `NoteBridgeError::Auth` carrying the response status and body
    /// when the exchange is rejected.
    pub async fn get_token(&self) -> Result<String> {
        if let Some(cached) = self.cached.read().await.as_ref() {
            if self.clock.now() < cached.expires_at {
                return Ok(cached.token.clone());
            }
        }

        debug!("requesting tenant access token");

        let request = self
            .http
            .request(Method::POST, &self.endpoint)
            .json(&TokenRequest { app_id: &self.app_id, app_secret: &self.app_secret });
        let response = self.http.send(request).await?;

        if !response.is_success() {
            return Err(NoteBridgeError::Auth(format!(
                "token exchange failed (HTTP {}): {}",
                response.status,
                response.body_display()
            )));
        }

        let body: TokenResponse = response.json()?;
        if body.code != 0 {
            // The Open API reports credential errors with HTTP 200
            return Err(NoteBridgeError::Auth(format!(
                "token exchange rejected (code {}): {}",
                body.code, body.msg
            )));
        }

        let token = body.tenant_access_token.ok_or_else(|| {
            NoteBridgeError::Auth("token exchange response missing tenant_access_token".to_string())
        })?;
        let lifetime = body.expire.unwrap_or(0).saturating_sub(TOKEN_REFRESH_MARGIN_SECS);
        let expires_at = self.clock.now() + Duration::from_secs(lifetime);

        *self.cached.write().await =
            Some(CachedToken { token: token.clone(), expires_at });

        info!("tenant access token acquired");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use notebridge_common::time::MockClock;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn config_for(server: &MockServer) -> FeishuConfig {
        FeishuConfig {
            app_id: "app-id".to_string(),
            app_secret: "app-secret".to_string(),
            app_token: "bitable-token".to_string(),
            table_id: "tbl1".to_string(),
            base_url: server.uri(),
        }
    }

    fn token_body(token: &str, expire: u64) -> serde_json::Value {
        json!({"code": 0, "msg": "ok", "tenant_access_token": token, "expire": expire})
    }

    #[tokio::test]
    async fn exchanges_credentials_for_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v3/tenant_access_token/internal"))
            .and(body_json(json!({"app_id": "app-id", "app_secret": "app-secret"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("t-1", 7200)))
            .expect(1)
            .mount(&server)
            .await;

        let provider = TenantTokenProvider::new(&config_for(&server)).unwrap();

        assert_eq!(provider.get_token().await.unwrap(), "t-1");
    }

    #[tokio::test]
    async fn reuses_cached_token_within_validity_window() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("t-1", 7200)))
            .expect(1)
            .mount(&server)
            .await;

        let provider = TenantTokenProvider::new(&config_for(&server)).unwrap();

        assert_eq!(provider.get_token().await.unwrap(), "t-1");
        // Second call must be served from the cache: the mock expects exactly
        // one exchange.
        assert_eq!(provider.get_token().await.unwrap(), "t-1");
    }

    #[tokio::test]
    async fn refreshes_after_margin_adjusted_expiry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("t-1", 7200)))
            .expect(2)
            .mount(&server)
            .await;

        let clock = Arc::new(MockClock::new());
        let provider =
            TenantTokenProvider::with_clock(&config_for(&server), clock.clone()).unwrap();

        provider.get_token().await.unwrap();

        // 7200s lifetime minus the 300s margin: still valid at 6899s...
        clock.advance(Duration::from_secs(6899));
        provider.get_token().await.unwrap();

        // ...expired at 6900s, forcing a second exchange.
        clock.advance(Duration::from_secs(1));
        provider.get_token().await.unwrap();
    }

    #[tokio::test]
    async fn non_success_status_is_an_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"msg": "invalid app_id"})),
            )
            .mount(&server)
            .await;

        let provider = TenantTokenProvider::new(&config_for(&server)).unwrap();
        let err = provider.get_token().await.unwrap_err();

        match err {
            NoteBridgeError::Auth(msg) => {
                assert!(msg.contains("400"));
                assert!(msg.contains("invalid app_id"));
            }
            other => panic!("expected auth error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn in_body_error_code_is_an_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 10003,
                "msg": "invalid app_secret"
            })))
            .mount(&server)
            .await;

        let provider = TenantTokenProvider::new(&config_for(&server)).unwrap();
        let err = provider.get_token().await.unwrap_err();

        match err {
            NoteBridgeError::Auth(msg) => assert!(msg.contains("10003")),
            other => panic!("expected auth error, got {other:?}"),
        }
    }
}
