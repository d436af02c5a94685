//! Fetching raw holiday documents.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::UpstreamConfig;
use crate::error::{EngineError, EngineResult};

/// Source of raw holiday documents, keyed by URL.
///
/// The production implementation is [`ReqwestSource`]; tests substitute an
/// in-memory source serving fixture pages.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Fetches the document at `url` as text.
    async fn fetch_document(&self, url: &str) -> EngineResult<String>;
}

/// HTTP holiday source using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestSource {
    client: Client,
}

impl ReqwestSource {
    /// Builds a client with the configured user agent and timeout.
    pub fn new(config: &UpstreamConfig) -> EngineResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EngineError::HttpClient {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HolidaySource for ReqwestSource {
    async fn fetch_document(&self, url: &str) -> EngineResult<String> {
        debug!(url = %url, "Fetching holiday document");

        let fetch_error = |message: String| EngineError::UpstreamFetch {
            url: url.to_string(),
            message,
        };

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Upstream request failed");
            if e.is_timeout() {
                fetch_error("request timed out".to_string())
            } else {
                fetch_error(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Upstream returned error status");
            return Err(fetch_error(format!("HTTP {}", status.as_u16())));
        }

        response
            .text()
            .await
            .map_err(|e| fetch_error(format!("failed to read response body: {}", e)))
    }
}
