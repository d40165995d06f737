//! Session identity supplied by the authentication collaborator

use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// Read-only identity for the current session. Owned by the
/// authentication collaborator; the form only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionIdentity {
    /// The signed-in user, if any
    pub user_id: Option<UserId>,
    /// Premium entitlement gating the AI filter feature
    pub premium: bool,
}

impl SessionIdentity {
    /// Identity for a signed-in user
    #[must_use]
    pub const fn new(user_id: UserId, premium: bool) -> Self {
        Self {
            user_id: Some(user_id),
            premium,
        }
    }

    /// Identity for a signed-out session
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            user_id: None,
            premium: false,
        }
    }

    /// Whether this session may use the AI filter
    #[must_use]
    pub const fn is_premium(&self) -> bool {
        self.premium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_is_never_premium() {
        let session = SessionIdentity::anonymous();
        assert!(session.user_id.is_none());
        assert!(!session.is_premium());
    }

    #[test]
    fn signed_in_premium() {
        let session = SessionIdentity::new(UserId::new(), true);
        assert!(session.user_id.is_some());
        assert!(session.is_premium());
    }
}
