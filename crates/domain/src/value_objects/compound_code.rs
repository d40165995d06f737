//! Compound code value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A plus-code style location encoding returned by the places
/// collaborator, e.g. `"8XJR+2V Halifax"`. Used as the destination
/// segment of a directions URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompoundCode(String);

impl CompoundCode {
    /// Create a compound code
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyCompoundCode` for empty or
    /// whitespace-only input
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::EmptyCompoundCode);
        }
        Ok(Self(code))
    }

    /// The raw code as returned by the collaborator
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL-safe destination segment: the literal `+` is percent-encoded
    /// and all whitespace is stripped. Compound codes carry exactly one
    /// `+`, so only the first occurrence is replaced.
    #[must_use]
    pub fn escaped(&self) -> String {
        self.0
            .replacen('+', "%2B", 1)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }
}

impl fmt::Display for CompoundCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
