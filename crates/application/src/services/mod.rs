//! Application services

mod directions;
mod form_view;
mod meal_finder;

pub use directions::{DEFAULT_MAPS_BASE_URL, directions_url};
pub use form_view::{FILTER_PLACEHOLDER, FilterField, FormView, LOCATION_PROMPT};
pub use meal_finder::{MealFinder, MealFinderConfig, SubmitOutcome};
