//! Place results returned by the nearby-places collaborator

use serde::{Deserialize, Serialize};

use crate::value_objects::{CompoundCode, Coordinates};

/// One restaurant from the current search. The collection lives only
/// for the duration of a single search; a new search replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Display name of the restaurant
    pub name: String,
    /// Where it is
    pub location: Coordinates,
    /// Location encoding used to build the directions URL
    pub compound_code: CompoundCode,
}

impl Place {
    /// Create a place result
    #[must_use]
    pub fn new(name: String, location: Coordinates, compound_code: CompoundCode) -> Self {
        Self {
            name,
            location,
            compound_code,
        }
    }

    /// The `{ name, location }` subset forwarded to the AI search
    /// collaborator
    #[must_use]
    pub fn summary(&self) -> PlaceSummary {
        PlaceSummary {
            name: self.name.clone(),
            location: self.location,
        }
    }
}

/// Projection of a [`Place`] without the routing fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSummary {
    /// Display name of the restaurant
    pub name: String,
    /// Where it is
    pub location: Coordinates,
}
