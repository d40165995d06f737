//! Price tier value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Discrete price ceiling for a restaurant search, matching the
/// collaborator's `maxprice` levels 0-4. Level 0 places no ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    /// No price ceiling (level 0)
    #[default]
    Any,
    /// Level 1
    Inexpensive,
    /// Level 2
    Moderate,
    /// Level 3
    Expensive,
    /// Level 4
    VeryExpensive,
}

impl PriceTier {
    /// All tiers in button-group order
    pub const ALL: [Self; 5] = [
        Self::Any,
        Self::Inexpensive,
        Self::Moderate,
        Self::Expensive,
        Self::VeryExpensive,
    ];

    /// Parse a numeric level strictly
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPriceTier` for levels outside 0-4
    pub fn try_from_level(level: u8) -> Result<Self, DomainError> {
        match level {
            0 => Ok(Self::Any),
            1 => Ok(Self::Inexpensive),
            2 => Ok(Self::Moderate),
            3 => Ok(Self::Expensive),
            4 => Ok(Self::VeryExpensive),
            other => Err(DomainError::InvalidPriceTier(other)),
        }
    }

    /// Normalize a numeric level, pinning out-of-range input to the
    /// top tier instead of forwarding it to the collaborator
    #[must_use]
    pub fn clamped(level: u8) -> Self {
        match Self::try_from_level(level) {
            Ok(tier) => tier,
            Err(_) => Self::VeryExpensive,
        }
    }

    /// The wire value sent as `maxprice`
    #[must_use]
    pub const fn query_level(&self) -> u8 {
        match self {
            Self::Any => 0,
            Self::Inexpensive => 1,
            Self::Moderate => 2,
            Self::Expensive => 3,
            Self::VeryExpensive => 4,
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "Any"),
            other => write!(f, "{}", "$".repeat(usize::from(other.query_level()))),
        }
    }
}
