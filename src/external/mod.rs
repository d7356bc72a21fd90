//! Third-party search providers.

pub mod serpapi;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::SearchError;
use crate::query::QueryParameters;

/// Raw provider response. Only `local_results[].address` is ever read.
pub type ResultSet = Value;

#[async_trait]
pub trait SearchProvider {
    async fn search(&self, params: &QueryParameters) -> Result<ResultSet, SearchError>;
}
