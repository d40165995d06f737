//! AI search adapter - Implements AiSearchPort using integration_aisearch

use application::error::ApplicationError;
use application::ports::AiSearchPort;
use async_trait::async_trait;
use domain::PlaceSummary;
use integration_aisearch::{AiSearchConfig, AiWebSearchApi, AiWebSearchClient};
use tracing::instrument;

/// Adapter for the AI web-search collaborator
#[derive(Debug)]
pub struct AiSearchAdapter {
    client: AiWebSearchClient,
}

impl AiSearchAdapter {
    /// Create an adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = AiWebSearchClient::with_defaults()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create an adapter with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: AiSearchConfig) -> Result<Self, ApplicationError> {
        let client = AiWebSearchClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl AiSearchPort for AiSearchAdapter {
    #[instrument(skip(self, places, filter), fields(results = places.len()))]
    async fn submit_filter(
        &self,
        places: Vec<PlaceSummary>,
        filter: String,
    ) -> Result<(), ApplicationError> {
        self.client
            .submit_filter(&places, &filter)
            .await
            .map_err(|e| ApplicationError::ExternalService(e.to_string()))
    }
}
