//! Application configuration

use std::fmt;
use std::path::Path;

use domain::{Coordinates, DomainError};
use integration_aisearch::AiSearchConfig;
use integration_places::PlacesConfig;
use serde::{Deserialize, Serialize};

use crate::telemetry::LogConfig;

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Fixed home origin: the search center and directions start point
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HomeConfig {
    #[serde(default = "default_home_latitude")]
    pub latitude: f64,
    #[serde(default = "default_home_longitude")]
    pub longitude: f64,
}

const fn default_home_latitude() -> f64 {
    44.669591
}

const fn default_home_longitude() -> f64 {
    -63.613833
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            latitude: default_home_latitude(),
            longitude: default_home_longitude(),
        }
    }
}

impl HomeConfig {
    /// Validate and convert into domain coordinates
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` for out-of-range values
    pub fn coordinates(&self) -> Result<Coordinates, DomainError> {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Device position served by the static geolocation adapter.
///
/// Absent configuration models a platform without the capability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeolocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

/// Session identity as configured (stands in for the authentication
/// collaborator)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Signed-in user id (UUID), if any
    #[serde(default)]
    pub user_id: Option<String>,

    /// Premium entitlement gating the AI filter
    #[serde(default)]
    pub premium: bool,
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Option<Environment>,

    /// Home origin for searches and directions
    #[serde(default)]
    pub home: HomeConfig,

    /// Maps service prefix for directions URLs
    #[serde(default = "default_maps_base_url")]
    pub maps_base_url: String,

    /// Nearby-places collaborator
    #[serde(default)]
    pub places: PlacesConfig,

    /// AI web-search collaborator
    #[serde(default)]
    pub ai_search: AiSearchConfig,

    /// Device position (absent = geolocation unsupported)
    #[serde(default)]
    pub geolocation: Option<GeolocationConfig>,

    /// Session identity
    #[serde(default)]
    pub session: SessionConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

fn default_maps_base_url() -> String {
    application::DEFAULT_MAPS_BASE_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: None,
            home: HomeConfig::default(),
            maps_base_url: default_maps_base_url(),
            places: PlacesConfig::default(),
            ai_search: AiSearchConfig::default(),
            geolocation: None,
            session: SessionConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the optional `config` file and
    /// `MEALFINDER_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("MEALFINDER")
                    .separator("_")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Load configuration from an explicit file, then apply
    /// environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialized
    pub fn load_from_file(path: &Path) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(
                config::Environment::with_prefix("MEALFINDER")
                    .separator("_")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}
