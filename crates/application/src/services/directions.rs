//! Directions URL assembly

use domain::{CompoundCode, Coordinates};

/// Default maps service prefix for turn-by-turn directions
pub const DEFAULT_MAPS_BASE_URL: &str = "https://www.google.com/maps";

/// Build the directions URL from the fixed origin to the selected
/// destination code: `{base}/dir/{lat},{lng}/{escaped code}`
#[must_use]
pub fn directions_url(base_url: &str, origin: &Coordinates, destination: &CompoundCode) -> String {
    format!(
        "{}/dir/{}/{}",
        base_url.trim_end_matches('/'),
        origin.waypoint(),
        destination.escaped()
    )
}
