//! Geolocation adapters - Platform capability stand-ins
//!
//! The browser's one-shot position request becomes a port; outside a
//! browser the position comes from configuration, and an absent
//! configuration models a platform without the capability.

use application::error::ApplicationError;
use application::ports::{GeolocationError, GeolocationPort};
use async_trait::async_trait;
use domain::Coordinates;
use tracing::debug;

use crate::config::GeolocationConfig;

/// Serves a fixed, configured device position
#[derive(Debug)]
pub struct StaticGeolocationAdapter {
    position: Coordinates,
}

impl StaticGeolocationAdapter {
    /// Create an adapter serving the given position
    #[must_use]
    pub const fn new(position: Coordinates) -> Self {
        Self { position }
    }

    /// Create an adapter from configuration
    ///
    /// # Errors
    ///
    /// Returns an error for out-of-range configured coordinates.
    pub fn from_config(config: &GeolocationConfig) -> Result<Self, ApplicationError> {
        let position = Coordinates::new(config.latitude, config.longitude)?;
        Ok(Self::new(position))
    }
}

#[async_trait]
impl GeolocationPort for StaticGeolocationAdapter {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        debug!(position = %self.position, "Serving configured device position");
        Ok(self.position)
    }
}

/// Models a platform without any geolocation capability
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedGeolocationAdapter;

#[async_trait]
impl GeolocationPort for UnsupportedGeolocationAdapter {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        Err(GeolocationError::Unsupported)
    }
}
