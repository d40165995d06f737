//! Nearby-places search port

use async_trait::async_trait;
use domain::{Coordinates, Place, PriceTier, SearchParameters};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// One nearby-restaurants query, ready for the collaborator.
///
/// Built from form parameters so the radius and price mapping lives in
/// exactly one place: radius is kilometers x 1000, maxprice is the
/// tier's wire level.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    /// Fixed search center (the home origin, not the device position)
    pub origin: Coordinates,
    /// Search radius in meters
    pub radius_meters: u32,
    /// Price ceiling
    pub max_price: PriceTier,
}

impl NearbyQuery {
    /// Build the query for the current form parameters
    #[must_use]
    pub fn from_parameters(origin: Coordinates, parameters: &SearchParameters) -> Self {
        Self {
            origin,
            radius_meters: parameters.distance.radius_meters(),
            max_price: parameters.price,
        }
    }
}

/// Port for the nearby-places collaborator
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlacesPort: Send + Sync {
    /// Search restaurants around the query origin.
    ///
    /// A non-success collaborator response is fatal for the submission
    /// and surfaces as [`ApplicationError::ExternalService`].
    async fn search_nearby(&self, query: &NearbyQuery) -> Result<Vec<Place>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::SearchDistance;
    use proptest::prelude::*;

    fn _assert_object_safe(_: &dyn PlacesPort) {}

    #[test]
    fn query_from_default_parameters() {
        let origin = Coordinates::new_unchecked(44.669591, -63.613833);
        let query = NearbyQuery::from_parameters(origin, &SearchParameters::default());
        assert_eq!(query.radius_meters, 25_000);
        assert_eq!(query.max_price, PriceTier::Any);
        assert_eq!(query.origin, origin);
    }

    proptest! {
        // For every slider distance and price tier, the wire values
        // are distance x 1000 and the tier level.
        #[test]
        fn query_mapping_holds_for_all_parameters(km in 1u8..=25, level in 0u8..=4) {
            let origin = Coordinates::new_unchecked(0.0, 0.0);
            let parameters = SearchParameters::new(
                SearchDistance::new(km).expect("in range"),
                PriceTier::try_from_level(level).expect("in range"),
                String::new(),
            );
            let query = NearbyQuery::from_parameters(origin, &parameters);
            prop_assert_eq!(query.radius_meters, u32::from(km) * 1000);
            prop_assert_eq!(query.max_price.query_level(), level);
        }
    }
}
