//! Component lifetime guard

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cancellation token guarding state writes after suspension points.
///
/// Created live when the component mounts and revoked on unmount.
/// Asynchronous completions (geolocation callback, network responses)
/// that land after revocation check the token and drop their state
/// updates silently.
#[derive(Debug, Clone)]
pub struct LivenessToken {
    live: Arc<AtomicBool>,
}

impl LivenessToken {
    /// Create a live token
    #[must_use]
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Whether the owning component is still mounted
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Revoke the token; all clones observe the revocation
    pub fn revoke(&self) {
        self.live.store(false, Ordering::Release);
    }
}

impl Default for LivenessToken {
    fn default() -> Self {
        Self::new()
    }
}
