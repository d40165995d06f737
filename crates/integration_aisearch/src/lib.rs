//! AI web-search integration for MealFinder
//!
//! HTTP client for the AI search collaborator that receives the
//! current result list and the premium user's filter text. The
//! response body is never consumed; callers only care whether the
//! notification was accepted.

mod client;
mod models;

pub use client::{AiSearchConfig, AiSearchError, AiWebSearchApi, AiWebSearchClient};
pub use models::AiSearchRequest;
