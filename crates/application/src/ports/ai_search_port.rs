//! AI web-search port

use async_trait::async_trait;
use domain::PlaceSummary;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the AI web-search collaborator.
///
/// The component forwards the transformed result list and the raw
/// filter text; the response body is never consumed. The call is
/// dispatched fire-and-forget and its failure is logged, not surfaced.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AiSearchPort: Send + Sync {
    /// Forward the current result set and filter text
    async fn submit_filter(
        &self,
        places: Vec<PlaceSummary>,
        filter: String,
    ) -> Result<(), ApplicationError>;
}
