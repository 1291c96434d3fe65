//! Question-answering backend client for Wisp.
//!
//! The widget core talks to the backend through the [`QaBackend`] trait so
//! tests can substitute a scripted double. [`http::HttpBackend`] is the
//! production implementation speaking the two-endpoint JSON protocol:
//! `GET /scrape_website` and `POST /predict`.

pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use http::{resolve_base_address, HttpBackend, HttpBackendConfig, LOCAL_DEV_BASE};

/// Reply to `GET /scrape_website`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapeReply {
    #[serde(default)]
    pub website_text: String,
}

/// Reply to `POST /predict`. Missing fields default to empty rather than
/// failing the exchange.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictReply {
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub follow_up_questions: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("network error: {0}")]
    Network(String),
    #[error("backend returned status {0}")]
    Status(u16),
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<BackendError> for wisp_common::WispError {
    fn from(err: BackendError) -> Self {
        wisp_common::WispError::Backend(err.to_string())
    }
}

#[async_trait]
pub trait QaBackend: Send + Sync {
    /// Fetch the page context the backend grounds its answers in.
    async fn scrape_website(&self) -> Result<ScrapeReply, BackendError>;

    /// Submit a visitor message together with the page context.
    async fn predict(
        &self,
        message: &str,
        website_text: &str,
    ) -> Result<PredictReply, BackendError>;
}
