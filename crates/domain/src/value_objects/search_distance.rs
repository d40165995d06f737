//! Search distance value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Search radius in whole kilometers, bounded to the 1-25 slider range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchDistance(u8);

impl SearchDistance {
    /// Smallest selectable distance
    pub const MIN_KM: u8 = 1;
    /// Largest selectable distance, also the default
    pub const MAX_KM: u8 = 25;

    /// Create a distance with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDistance` if `km` is outside [1, 25]
    pub fn new(km: u8) -> Result<Self, DomainError> {
        if !(Self::MIN_KM..=Self::MAX_KM).contains(&km) {
            return Err(DomainError::InvalidDistance(km));
        }
        Ok(Self(km))
    }

    /// Create a distance, clamping out-of-range input to the nearest bound
    #[must_use]
    pub fn clamped(km: u8) -> Self {
        Self(km.clamp(Self::MIN_KM, Self::MAX_KM))
    }

    /// Distance in kilometers
    #[must_use]
    pub const fn kilometers(&self) -> u8 {
        self.0
    }

    /// Radius in meters, as sent to the places collaborator
    #[must_use]
    pub fn radius_meters(&self) -> u32 {
        u32::from(self.0) * 1000
    }
}

impl Default for SearchDistance {
    fn default() -> Self {
        Self(Self::MAX_KM)
    }
}

impl fmt::Display for SearchDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_is_max() {
        assert_eq!(SearchDistance::default().kilometers(), 25);
    }

    #[test]
    fn bounds_are_accepted() {
        assert!(SearchDistance::new(1).is_ok());
        assert!(SearchDistance::new(25).is_ok());
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(SearchDistance::new(0).is_err());
        assert!(SearchDistance::new(26).is_err());
    }

    #[test]
    fn clamped_pins_to_bounds() {
        assert_eq!(SearchDistance::clamped(0).kilometers(), 1);
        assert_eq!(SearchDistance::clamped(200).kilometers(), 25);
        assert_eq!(SearchDistance::clamped(10).kilometers(), 10);
    }

    #[test]
    fn display_includes_unit() {
        assert_eq!(format!("{}", SearchDistance::default()), "25 km");
    }

    proptest! {
        // Radius sent to the collaborator is always distance x 1000
        #[test]
        fn radius_is_km_times_1000(km in 1u8..=25) {
            let distance = SearchDistance::new(km).expect("in range");
            prop_assert_eq!(distance.radius_meters(), u32::from(km) * 1000);
        }
    }
}
