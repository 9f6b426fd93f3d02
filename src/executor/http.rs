//! HTTP request executor backed by reqwest.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::executor::RequestExecutor;
use crate::http::{ApiRequest, ApiResponse, StatusCode};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Production executor performing real HTTP calls.
///
/// Owns every transport concern the client module stays out of: base URL
/// joining, timeouts, default headers, JSON encoding of the descriptor body
/// and bearer-token session handling. Non-2xx statuses come back as ordinary
/// [`ApiResponse`] values; only transport breakdowns are errors.
pub struct HttpExecutor {
    /// Executor configuration.
    config: ClientConfig,
    /// Shared reqwest client.
    client: reqwest::Client,
    /// Session token attached as `Authorization: Bearer <token>` once set.
    token: RwLock<Option<String>>,
}

impl HttpExecutor {
    /// Create a new executor from a configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        reqwest::Url::parse(&config.base_url)
            .map_err(|_| ClientError::invalid_url(&config.base_url))?;

        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self {
            config,
            client,
            token: RwLock::new(None),
        })
    }

    /// Create a new executor with default configuration.
    pub fn with_defaults() -> Result<Self, ClientError> {
        Self::new(ClientConfig::default())
    }

    /// Get the executor configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Store a session token for subsequent requests.
    pub async fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        debug!("Session token installed");
        *self.token.write().await = Some(token);
    }

    /// Drop the stored session token.
    pub async fn clear_token(&self) {
        debug!("Session token cleared");
        *self.token.write().await = None;
    }

    /// Check whether a session token is currently stored.
    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let url = self.config.endpoint(&request.path);
        debug!("Executing request: {} {}", request.method, url);

        let mut builder = self.client.request(reqwest::Method::from(&request.method), &url);

        for (key, value) in &self.config.default_headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(token) = self.token.read().await.as_deref() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = StatusCode(response.status().as_u16());

        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.as_str().to_string(), v.to_string());
            }
        }

        let bytes = response.bytes().await?;
        let body = if bytes.is_empty() { None } else { Some(bytes) };

        if !status.is_success() {
            warn!(
                "Request {} {} answered with status {}",
                request.method, url, status.0
            );
        }

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}
