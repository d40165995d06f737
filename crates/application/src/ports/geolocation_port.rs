//! Platform geolocation port

use async_trait::async_trait;
use domain::Coordinates;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Failures of the platform geolocation capability.
///
/// The display strings are the standing messages the form shows; they
/// distinguish a platform without the capability from a denied or
/// failed position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    /// The platform has no geolocation capability at all
    #[error("Geolocation is not supported on this platform")]
    Unsupported,

    /// The capability exists but the request was denied or failed
    #[error("Failed to get location")]
    Unavailable,
}

/// Port for the platform's one-shot "get current position" capability
///
/// The request is fire-and-forget from the component's perspective:
/// it is issued exactly once at mount and never retried.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeolocationPort: Send + Sync {
    /// Request the device's current position
    async fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}
