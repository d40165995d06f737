//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the valid degree ranges
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Search distance outside the supported slider range
    #[error("Invalid search distance: {0} km is outside 1-25")]
    InvalidDistance(u8),

    /// Price tier outside the discrete 0-4 domain
    #[error("Invalid price tier: {0} is outside 0-4")]
    InvalidPriceTier(u8),

    /// Compound code was empty or whitespace-only
    #[error("Compound code cannot be empty")]
    EmptyCompoundCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_distance_message() {
        let err = DomainError::InvalidDistance(40);
        assert_eq!(err.to_string(), "Invalid search distance: 40 km is outside 1-25");
    }

    #[test]
    fn invalid_price_tier_message() {
        let err = DomainError::InvalidPriceTier(50);
        assert_eq!(err.to_string(), "Invalid price tier: 50 is outside 0-4");
    }

    #[test]
    fn invalid_coordinates_message_names_both_axes() {
        let err = DomainError::InvalidCoordinates;
        assert!(err.to_string().contains("latitude"));
        assert!(err.to_string().contains("longitude"));
    }
}
