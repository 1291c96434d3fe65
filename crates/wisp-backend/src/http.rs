//! HTTP implementation of the backend protocol.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::{BackendError, PredictReply, QaBackend, ScrapeReply};

/// Fixed development address used when the host page runs on loopback.
pub const LOCAL_DEV_BASE: &str = "http://127.0.0.1:5000";

/// Pick the backend base address for a hosting origin.
///
/// Loopback hostnames target the fixed local development server; any other
/// host targets its own origin.
pub fn resolve_base_address(hostname: &str, origin: &str) -> String {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        LOCAL_DEV_BASE.to_string()
    } else {
        origin.to_string()
    }
}

/// HTTP backend configuration.
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl HttpBackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Backend client speaking JSON over HTTP.
pub struct HttpBackend {
    config: HttpBackendConfig,
    http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: HttpBackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BackendError::Network(e.to_string()))?;
        Ok(Self { config, http })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}

#[async_trait]
impl QaBackend for HttpBackend {
    async fn scrape_website(&self) -> Result<ScrapeReply, BackendError> {
        let url = self.endpoint("scrape_website");
        debug!(%url, "fetching website context");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Self::decode(response).await
    }

    async fn predict(
        &self,
        message: &str,
        website_text: &str,
    ) -> Result<PredictReply, BackendError> {
        let url = self.endpoint("predict");
        debug!(%url, message_len = message.len(), "sending predict request");

        let body = serde_json::json!({
            "message": message,
            "website_text": website_text,
        });

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loopback_hosts_use_dev_base() {
        assert_eq!(
            resolve_base_address("localhost", "http://localhost:8080"),
            LOCAL_DEV_BASE
        );
        assert_eq!(
            resolve_base_address("127.0.0.1", "http://127.0.0.1:8080"),
            LOCAL_DEV_BASE
        );
    }

    #[test]
    fn other_hosts_use_their_origin() {
        assert_eq!(
            resolve_base_address("example.com", "https://example.com"),
            "https://example.com"
        );
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let backend =
            HttpBackend::new(HttpBackendConfig::new("http://127.0.0.1:5000/")).unwrap();
        assert_eq!(
            backend.endpoint("predict"),
            "http://127.0.0.1:5000/predict"
        );
    }

    #[test]
    fn config_builder_sets_timeout() {
        let config = HttpBackendConfig::new(LOCAL_DEV_BASE)
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.base_url, LOCAL_DEV_BASE);
    }
}
