//! Application layer - The MealFinder component and its ports
//!
//! Holds the form component, the port traits for every external
//! collaborator (places search, AI search, geolocation, navigation,
//! session identity), and the application error type. Adapters in the
//! infrastructure crate implement the ports.

pub mod error;
pub mod liveness;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use liveness::LivenessToken;
pub use ports::*;
pub use services::*;
