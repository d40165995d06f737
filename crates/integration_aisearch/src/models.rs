//! Wire types for the AI web-search endpoint

use serde::Serialize;

use domain::PlaceSummary;

/// Request body for the AI search collaborator. Field names follow the
/// collaborator's camelCase contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSearchRequest {
    pub restaurants_data: Vec<RestaurantEntry>,
    pub search_data: String,
}

/// One transformed result: name plus a bare lat/lng pair
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantEntry {
    pub name: String,
    pub location: LatLng,
}

#[derive(Debug, Clone, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl AiSearchRequest {
    /// Build the request body from the transformed result list and the
    /// raw filter text
    #[must_use]
    pub fn new(places: &[PlaceSummary], filter: &str) -> Self {
        Self {
            restaurants_data: places.iter().map(RestaurantEntry::from).collect(),
            search_data: filter.to_string(),
        }
    }
}

impl From<&PlaceSummary> for RestaurantEntry {
    fn from(summary: &PlaceSummary) -> Self {
        Self {
            name: summary.name.clone(),
            location: LatLng {
                lat: summary.location.latitude(),
                lng: summary.location.longitude(),
            },
        }
    }
}
