//! Navigator adapters - Open directions in a new browsing context

use std::process::Stdio;

use application::error::ApplicationError;
use application::ports::NavigatorPort;
use async_trait::async_trait;
use tracing::{info, instrument};

/// Opens URLs with the platform opener command, detached from the
/// submission flow
#[derive(Debug)]
pub struct CommandNavigator {
    command: String,
}

impl CommandNavigator {
    /// Create a navigator using the platform's default opener
    #[must_use]
    pub fn new() -> Self {
        Self {
            command: default_opener().to_string(),
        }
    }

    /// Create a navigator with an explicit opener command
    #[must_use]
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for CommandNavigator {
    fn default() -> Self {
        Self::new()
    }
}

fn default_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

#[async_trait]
impl NavigatorPort for CommandNavigator {
    #[instrument(skip(self))]
    async fn open_external(&self, url: &str) -> Result<(), ApplicationError> {
        info!(url = %url, command = %self.command, "Opening directions in system browser");
        tokio::process::Command::new(&self.command)
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                ApplicationError::ExternalService(format!("Failed to open browser: {e}"))
            })?;
        Ok(())
    }
}

/// Logs the directions URL instead of opening it (headless runs and
/// dry-run mode)
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNavigator;

#[async_trait]
impl NavigatorPort for LoggingNavigator {
    async fn open_external(&self, url: &str) -> Result<(), ApplicationError> {
        info!(url = %url, "Directions URL (not opened)");
        Ok(())
    }
}
