//! QueryRunner: one search, one address per line.

use std::io::Write;

use serde_json::Value;

use crate::error::SearchError;
use crate::external::{ResultSet, SearchProvider};
use crate::query::QueryParameters;

pub struct QueryRunner<P> {
    provider: P,
    params: QueryParameters,
}

impl<P: SearchProvider> QueryRunner<P> {
    pub fn new(provider: P, params: QueryParameters) -> Self {
        Self { provider, params }
    }

    /// Fetches once and prints every address in provider order.
    /// Returns how many lines were written.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<usize, SearchError> {
        tracing::info!(
            engine = %self.params.engine,
            q = %self.params.q,
            ll = %self.params.ll,
            "searching"
        );
        let results = self.provider.search(&self.params).await?;
        let printed = print_addresses(&results, out)?;
        tracing::debug!(printed, "done");
        Ok(printed)
    }
}

/// Writes `local_results[i].address` for each entry. Entries before a
/// malformed one are already written and flushed when the error returns.
pub fn print_addresses<W: Write>(results: &ResultSet, out: &mut W) -> Result<usize, SearchError> {
    let entries = results
        .get("local_results")
        .ok_or_else(|| SearchError::SchemaMismatch("response has no `local_results`".into()))?
        .as_array()
        .ok_or_else(|| SearchError::SchemaMismatch("`local_results` is not an array".into()))?;

    for (index, entry) in entries.iter().enumerate() {
        let address = entry
            .get("address")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                SearchError::SchemaMismatch(format!("local_results[{index}] has no string `address`"))
            })?;
        writeln!(out, "{address}")?;
        out.flush()?;
    }

    Ok(entries.len())
}
