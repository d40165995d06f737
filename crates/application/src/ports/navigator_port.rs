//! External navigation port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for opening a URL in a new browsing context
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NavigatorPort: Send + Sync {
    /// Open the URL externally (new tab, system browser, ...)
    async fn open_external(&self, url: &str) -> Result<(), ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn NavigatorPort) {}
}
