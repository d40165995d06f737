//! Session adapter - Serves the configured identity

use application::error::ApplicationError;
use application::ports::SessionPort;
use domain::{SessionIdentity, UserId};

use crate::config::SessionConfig;

/// Read-only session identity from configuration, standing in for the
/// authentication collaborator
#[derive(Debug, Clone, Copy)]
pub struct ConfigSessionAdapter {
    identity: SessionIdentity,
}

impl ConfigSessionAdapter {
    /// Create an adapter serving the given identity
    #[must_use]
    pub const fn new(identity: SessionIdentity) -> Self {
        Self { identity }
    }

    /// Create an adapter from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured user id is not a valid UUID.
    pub fn from_config(config: &SessionConfig) -> Result<Self, ApplicationError> {
        let user_id = config
            .user_id
            .as_deref()
            .map(UserId::parse)
            .transpose()
            .map_err(|e| ApplicationError::Internal(format!("Invalid session user id: {e}")))?;

        Ok(Self::new(SessionIdentity {
            user_id,
            premium: config.premium,
        }))
    }
}

impl SessionPort for ConfigSessionAdapter {
    fn current_identity(&self) -> SessionIdentity {
        self.identity
    }
}
