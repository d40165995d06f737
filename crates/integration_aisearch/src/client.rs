//! AI web-search HTTP client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use domain::PlaceSummary;

use crate::models::AiSearchRequest;

/// AI search client errors
#[derive(Debug, Error)]
pub enum AiSearchError {
    /// Connection to the AI search service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request failed (non-success status or transport error)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Request timed out
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

/// AI search service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSearchConfig {
    /// Backend base URL (default: <http://localhost:3000>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for AiSearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Client trait for the AI web-search endpoint
#[async_trait]
pub trait AiWebSearchApi: Send + Sync {
    /// Forward the result list and filter text; the response body is
    /// discarded
    async fn submit_filter(
        &self,
        places: &[PlaceSummary],
        filter: &str,
    ) -> Result<(), AiSearchError>;
}

/// HTTP implementation of [`AiWebSearchApi`]
#[derive(Debug)]
pub struct AiWebSearchClient {
    client: Client,
    config: AiSearchConfig,
}

impl AiWebSearchClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: AiSearchConfig) -> Result<Self, AiSearchError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AiSearchError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, AiSearchError> {
        Self::new(AiSearchConfig::default())
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/api/ai-web-search",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl AiWebSearchApi for AiWebSearchClient {
    #[instrument(skip(self, places, filter), fields(results = places.len()))]
    async fn submit_filter(
        &self,
        places: &[PlaceSummary],
        filter: &str,
    ) -> Result<(), AiSearchError> {
        let url = self.endpoint();
        let body = AiSearchRequest::new(places, filter);
        debug!(url = %url, "Submitting AI filter notification");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiSearchError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else if e.is_connect() {
                    AiSearchError::ConnectionFailed(e.to_string())
                } else {
                    AiSearchError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        debug!(status = %status, "AI search collaborator responded");

        if !status.is_success() {
            return Err(AiSearchError::RequestFailed(format!("HTTP {status}")));
        }

        // The response body is intentionally not consumed.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = AiSearchConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let client = AiWebSearchClient::new(AiSearchConfig {
            base_url: "https://backend.example.com/".to_string(),
            ..Default::default()
        })
        .expect("client creation");

        assert_eq!(
            client.endpoint(),
            "https://backend.example.com/api/ai-web-search"
        );
    }

    #[test]
    fn error_display() {
        let err = AiSearchError::Timeout { timeout_secs: 30 };
        assert!(err.to_string().contains("30s"));
    }
}
