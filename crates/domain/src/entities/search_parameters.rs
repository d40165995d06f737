//! User-adjustable search parameters

use serde::{Deserialize, Serialize};

use crate::value_objects::{PriceTier, SearchDistance};

/// The form's adjustable state, read at submission time.
///
/// Defaults match the form's initial rendering: full 25 km radius, no
/// price ceiling, empty filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchParameters {
    /// Search radius selected on the distance slider
    pub distance: SearchDistance,
    /// Price ceiling selected in the button group
    pub price: PriceTier,
    /// Free-text AI filter, meaningful only for premium sessions
    pub mystery_filter: String,
}

impl SearchParameters {
    /// Create parameters from explicit values
    #[must_use]
    pub fn new(distance: SearchDistance, price: PriceTier, mystery_filter: String) -> Self {
        Self {
            distance,
            price,
            mystery_filter,
        }
    }
}
