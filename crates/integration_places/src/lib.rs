//! Nearby-places integration for MealFinder
//!
//! HTTP client for the backend "nearby places" endpoint. The endpoint
//! is consumed as an opaque collaborator: one GET per search, no
//! retries, a non-success status is fatal for the calling submission.

mod client;
mod models;

pub use client::{NearbyPlacesApi, NearbyPlacesClient, PlacesConfig, PlacesError};
pub use models::NearbyPlace;
