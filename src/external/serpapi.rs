use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::{ResultSet, SearchProvider};
use crate::config::{Config, DEFAULT_BASE_URL};
use crate::error::SearchError;
use crate::query::QueryParameters;

pub struct SerpApiClient {
    client: Client,
    base: String,
}

impl SerpApiClient {
    pub fn from_config(cfg: &Config) -> Result<Self, SearchError> {
        let base = cfg
            .get("SERPAPI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // Honor REQUEST_TIMEOUT if present; default 60s
        let timeout_secs = cfg.get_u64("REQUEST_TIMEOUT").unwrap_or(60);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(SearchError::Connectivity)?;

        Ok(Self { client, base: base.trim_end_matches('/').to_string() })
    }

    fn endpoint(&self) -> String {
        format!("{}/search.json", self.base)
    }
}

#[async_trait]
impl SearchProvider for SerpApiClient {
    async fn search(&self, params: &QueryParameters) -> Result<ResultSet, SearchError> {
        let resp = self
            .client
            .get(self.endpoint())
            .query(&params.as_pairs())
            .send()
            .await
            .map_err(|e| SearchError::Connectivity(e.without_url()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| SearchError::Connectivity(e.without_url()))?;
        tracing::debug!(status = status.as_u16(), bytes = text.len(), "provider responded");

        if !status.is_success() {
            return Err(classify_failure(status, &text));
        }

        let value: Value = serde_json::from_str(&text)
            .map_err(|e| SearchError::SchemaMismatch(format!("response is not JSON: {e}")))?;

        // The provider reports some failures (e.g. no results) as 200 + `error`.
        if value.get("local_results").is_none() {
            if let Some(message) = value.get("error").and_then(Value::as_str) {
                return Err(SearchError::Provider {
                    status: status.as_u16(),
                    message: message.to_string(),
                });
            }
        }

        Ok(value)
    }
}

fn classify_failure(status: StatusCode, body: &str) -> SearchError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SearchError::Authentication(message),
        StatusCode::TOO_MANY_REQUESTS => SearchError::QuotaExhausted(message),
        status => SearchError::Provider { status: status.as_u16(), message },
    }
}
