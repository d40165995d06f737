//! Places adapter - Implements PlacesPort using integration_places

use application::error::ApplicationError;
use application::ports::{NearbyQuery, PlacesPort};
use async_trait::async_trait;
use domain::Place;
use integration_places::{NearbyPlacesApi, NearbyPlacesClient, PlacesConfig};
use tracing::{instrument, warn};

/// The one user-visible message for any failed fetch; the detail goes
/// to the log
const FETCH_FAILED_MESSAGE: &str = "Failed to fetch places";

/// Adapter for the nearby-places collaborator
#[derive(Debug)]
pub struct PlacesAdapter {
    client: NearbyPlacesClient,
}

impl PlacesAdapter {
    /// Create an adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = NearbyPlacesClient::with_defaults()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create an adapter with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: PlacesConfig) -> Result<Self, ApplicationError> {
        let client = NearbyPlacesClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PlacesPort for PlacesAdapter {
    #[instrument(skip(self, query), fields(radius = query.radius_meters, maxprice = query.max_price.query_level()))]
    async fn search_nearby(&self, query: &NearbyQuery) -> Result<Vec<Place>, ApplicationError> {
        self.client
            .nearby_restaurants(&query.origin, query.radius_meters, query.max_price)
            .await
            .map_err(|err| {
                warn!(error = %err, "Nearby places fetch failed");
                ApplicationError::ExternalService(FETCH_FAILED_MESSAGE.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_adapter() {
        assert!(PlacesAdapter::new().is_ok());
    }

    #[test]
    fn with_config_creates_adapter() {
        let config = PlacesConfig {
            base_url: "https://backend.example.com".to_string(),
            timeout_secs: 5,
        };
        assert!(PlacesAdapter::with_config(config).is_ok());
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PlacesAdapter>();
    }
}
