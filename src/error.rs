//! Failure taxonomy for a single search run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("could not reach the search provider")]
    Connectivity(#[source] reqwest::Error),

    #[error("search provider rejected the credential: {0}")]
    Authentication(String),

    #[error("search provider quota exhausted: {0}")]
    QuotaExhausted(String),

    #[error("search provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("unexpected response shape: {0}")]
    SchemaMismatch(String),

    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}
