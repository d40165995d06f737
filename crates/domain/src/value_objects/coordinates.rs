//! Geographic coordinates value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A position in decimal degrees, as produced by the platform
/// geolocation capability or carried by a place result.
///
/// Created once per source and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl Coordinates {
    /// Create coordinates with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in
    /// [-90, 90] or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create coordinates without validation (for trusted constants)
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Render the `lat,lng` waypoint segment used in directions URLs
    #[must_use]
    pub fn waypoint(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_coordinates() {
        let loc = Coordinates::new(44.669591, -63.613833).expect("valid coordinates");
        assert!((loc.latitude() - 44.669591).abs() < f64::EPSILON);
        assert!((loc.longitude() + 63.613833).abs() < f64::EPSILON);
    }

    #[test]
    fn boundary_coordinates() {
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
        assert!(Coordinates::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn invalid_latitude() {
        assert!(Coordinates::new(91.0, 0.0).is_err());
        assert!(Coordinates::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn invalid_longitude() {
        assert!(Coordinates::new(0.0, 181.0).is_err());
        assert!(Coordinates::new(0.0, -181.0).is_err());
    }

    #[test]
    fn display_reads_as_lat_comma_lng() {
        let loc = Coordinates::new(44.669591, -63.613833).expect("valid");
        assert_eq!(format!("{loc}"), "44.669591, -63.613833");
    }

    #[test]
    fn waypoint_has_no_space() {
        let loc = Coordinates::new(44.669591, -63.613833).expect("valid");
        assert_eq!(loc.waypoint(), "44.669591,-63.613833");
    }

    #[test]
    fn serialization_round_trip() {
        let loc = Coordinates::new(44.5, -63.5).expect("valid");
        let json = serde_json::to_string(&loc).expect("serialize");
        let back: Coordinates = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loc, back);
    }
}
