//! HTTP access to Microsoft Graph.
//!
//! [`GraphApi`] is the seam the fetchers are written against. The production
//! implementation, [`HttpGraphClient`], sends the caller's token untouched in
//! the `Authorization` header and leaves timeouts to reqwest's defaults.

use crate::config::GraphConfig;
use crate::error::{GraphError, GraphResult};
use once_cell::sync::Lazy;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

/// Shared HTTP client so every Graph call reuses one connection pool
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Minimal GET interface over the Graph API.
#[async_trait::async_trait]
pub trait GraphApi: Send + Sync {
    /// GET `path` and parse the body as JSON.
    async fn get_json(&self, path: &str, token: &str) -> GraphResult<Value>;

    /// GET `path` and return the raw body bytes.
    async fn get_bytes(&self, path: &str, token: &str) -> GraphResult<Vec<u8>>;
}

#[derive(Debug, Clone)]
pub struct HttpGraphClient {
    config: GraphConfig,
    http: reqwest::Client,
}

impl HttpGraphClient {
    pub fn new(config: GraphConfig) -> Self {
        Self::with_client(config, HTTP_CLIENT.clone())
    }

    pub fn with_client(config: GraphConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    pub fn from_env() -> Self {
        Self::new(GraphConfig::from_env())
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Absolute URL for a Graph path.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn send(&self, path: &str, token: &str) -> GraphResult<reqwest::Response> {
        log::debug!("[graph] GET {}", path);

        let response = self
            .http
            .get(self.url(path))
            .header(AUTHORIZATION, token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GraphError::Status { status, body });
        }

        Ok(response)
    }
}

impl Default for HttpGraphClient {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

#[async_trait::async_trait]
impl GraphApi for HttpGraphClient {
    async fn get_json(&self, path: &str, token: &str) -> GraphResult<Value> {
        let bytes = self.send(path, token).await?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get_bytes(&self, path: &str, token: &str) -> GraphResult<Vec<u8>> {
        let bytes = self.send(path, token).await?.bytes().await?;
        Ok(bytes.to_vec())
    }
}
