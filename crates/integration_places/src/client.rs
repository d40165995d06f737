//! Nearby-places HTTP client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use domain::{Coordinates, Place, PriceTier};

use crate::models::NearbyPlace;

/// Nearby-places client errors
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Connection to the places service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request failed (non-success status or transport error)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service is temporarily unavailable (5xx)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Failed to parse the response payload
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request timed out
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

/// Nearby-places service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
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

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Client trait for the nearby-places endpoint
#[async_trait]
pub trait NearbyPlacesApi: Send + Sync {
    /// Search restaurants around the origin within the given radius
    /// and price ceiling
    async fn nearby_restaurants(
        &self,
        origin: &Coordinates,
        radius_meters: u32,
        max_price: PriceTier,
    ) -> Result<Vec<Place>, PlacesError>;
}

/// HTTP implementation of [`NearbyPlacesApi`]
#[derive(Debug)]
pub struct NearbyPlacesClient {
    client: Client,
    config: PlacesConfig,
}

impl NearbyPlacesClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: PlacesConfig) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PlacesError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, PlacesError> {
        Self::new(PlacesConfig::default())
    }

    /// Build the query URL. The search type is always `restaurant`.
    fn build_nearby_url(
        &self,
        origin: &Coordinates,
        radius_meters: u32,
        max_price: PriceTier,
    ) -> String {
        format!(
            "{}/api/nearby?lat={}&lng={}&radius={}&type=restaurant&maxprice={}",
            self.config.base_url.trim_end_matches('/'),
            origin.latitude(),
            origin.longitude(),
            radius_meters,
            max_price.query_level()
        )
    }

    fn map_send_error(&self, err: &reqwest::Error) -> PlacesError {
        if err.is_timeout() {
            PlacesError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else if err.is_connect() {
            PlacesError::ConnectionFailed(err.to_string())
        } else {
            PlacesError::RequestFailed(err.to_string())
        }
    }
}

#[async_trait]
impl NearbyPlacesApi for NearbyPlacesClient {
    #[instrument(skip(self), fields(radius = radius_meters, maxprice = max_price.query_level()))]
    async fn nearby_restaurants(
        &self,
        origin: &Coordinates,
        radius_meters: u32,
        max_price: PriceTier,
    ) -> Result<Vec<Place>, PlacesError> {
        let url = self.build_nearby_url(origin, radius_meters, max_price);
        debug!(url = %url, "Fetching nearby restaurants");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        debug!(status = %status, "Received nearby-places response");

        if status.is_server_error() {
            return Err(PlacesError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(PlacesError::RequestFailed(format!("HTTP {status}")));
        }

        let raw: Vec<NearbyPlace> = response
            .json()
            .await
            .map_err(|e| PlacesError::ParseError(e.to_string()))?;

        raw.into_iter().map(NearbyPlace::into_domain).collect()
    }
}
