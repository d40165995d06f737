//! Session identity port

use domain::SessionIdentity;
#[cfg(test)]
use mockall::automock;

/// Read-only access to the shared session context.
///
/// Injected at construction so tests can substitute identities; the
/// component never mutates it. Reads are synchronous, matching the
/// collaborator contract.
#[cfg_attr(test, automock)]
pub trait SessionPort: Send + Sync {
    /// The identity of the current session
    fn current_identity(&self) -> SessionIdentity;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn SessionPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SessionPort>();
    }
}
