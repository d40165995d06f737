//! Wire types for the nearby-places endpoint

use serde::Deserialize;

use domain::{CompoundCode, Coordinates, Place};

use crate::client::PlacesError;

/// One raw result from the collaborator. Only the fields the form
/// consumes are modeled; everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NearbyPlace {
    pub name: String,
    pub geometry: Geometry,
    pub plus_code: PlusCode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlusCode {
    pub compound_code: String,
}

impl NearbyPlace {
    /// Convert the raw result into a domain place
    ///
    /// # Errors
    ///
    /// Returns `PlacesError::ParseError` when the payload carries
    /// out-of-range coordinates or an empty compound code.
    pub fn into_domain(self) -> Result<Place, PlacesError> {
        let location = Coordinates::new(self.geometry.location.lat, self.geometry.location.lng)
            .map_err(|e| PlacesError::ParseError(e.to_string()))?;
        let compound_code = CompoundCode::new(self.plus_code.compound_code)
            .map_err(|e| PlacesError::ParseError(e.to_string()))?;
        Ok(Place::new(self.name, location, compound_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(lat: f64, lng: f64, code: &str) -> NearbyPlace {
        NearbyPlace {
            name: "Test Diner".to_string(),
            geometry: Geometry {
                location: LatLng { lat, lng },
            },
            plus_code: PlusCode {
                compound_code: code.to_string(),
            },
        }
    }

    #[test]
    fn converts_valid_result() {
        let place = raw(44.65, -63.58, "ABC+123 Halifax")
            .into_domain()
            .expect("valid payload");
        assert_eq!(place.name, "Test Diner");
        assert_eq!(place.compound_code.as_str(), "ABC+123 Halifax");
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let result = raw(95.0, 0.0, "ABC+123").into_domain();
        assert!(matches!(result, Err(PlacesError::ParseError(_))));
    }

    #[test]
    fn rejects_empty_compound_code() {
        let result = raw(44.65, -63.58, "  ").into_domain();
        assert!(matches!(result, Err(PlacesError::ParseError(_))));
    }

    #[test]
    fn deserializes_collaborator_shape() {
        let json = r#"{
            "name": "Test Diner",
            "rating": 4.5,
            "geometry": { "location": { "lat": 44.65, "lng": -63.58 } },
            "plus_code": { "compound_code": "ABC+123 Halifax", "global_code": "87PQABC+123" }
        }"#;
        let raw: NearbyPlace = serde_json::from_str(json).expect("deserialize");
        assert_eq!(raw.name, "Test Diner");
        assert!((raw.geometry.location.lat - 44.65).abs() < f64::EPSILON);
    }
}
