//! Infrastructure layer for MealFinder
//!
//! Adapters implementing the application ports on top of the
//! integration clients and platform capabilities, plus configuration
//! loading and logging initialization.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use config::{AppConfig, Environment, GeolocationConfig, HomeConfig, SessionConfig};
pub use telemetry::{LogConfig, LogFormat, init_tracing};
