//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Fallback message when a submission fails for an unexpected reason
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to load places";

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The device position could not be acquired
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    /// External service error (places search, AI search, navigation)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// The single user-visible string the form shows for this failure.
    /// No structured codes cross the component boundary.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::LocationUnavailable(message) | Self::ExternalService(message) => {
                if message.is_empty() {
                    FALLBACK_ERROR_MESSAGE.to_string()
                } else {
                    message.clone()
                }
            },
            Self::Domain(err) => err.to_string(),
            Self::Internal(_) => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_service_message_is_shown_verbatim() {
        let err = ApplicationError::ExternalService("Failed to fetch places".to_string());
        assert_eq!(err.user_message(), "Failed to fetch places");
    }

    #[test]
    fn internal_error_falls_back_to_generic_message() {
        let err = ApplicationError::Internal("poisoned".to_string());
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn empty_message_falls_back() {
        let err = ApplicationError::ExternalService(String::new());
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn domain_error_converts() {
        let err: ApplicationError = DomainError::InvalidPriceTier(50).into();
        assert!(err.user_message().contains("price tier"));
    }
}
