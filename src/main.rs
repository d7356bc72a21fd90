mod cli;
mod config;
mod error;
mod external;
mod logging;
mod query;
mod runner;

use std::io;

use anyhow::{Context, Result};
use config::Config;
use external::serpapi::SerpApiClient;
use query::QueryParameters;
use runner::QueryRunner;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let cfg = Config::load();
    logging::init(args.verbose, &cfg);

    // Connection flags override config before the client is built
    let mut overrides = Vec::new();
    if let Some(base) = args.base_url.as_deref() {
        overrides.push(("SERPAPI_BASE_URL".to_string(), base.to_string()));
    }
    if let Some(secs) = args.timeout {
        overrides.push(("REQUEST_TIMEOUT".to_string(), secs.to_string()));
    }
    let cfg = cfg.with_overrides(overrides);

    let params = QueryParameters::resolve(&args, &cfg)
        .with_context(|| format!("resolving search parameters (config file: {})", cfg.config_path.display()))?;
    let client = SerpApiClient::from_config(&cfg)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    QueryRunner::new(client, params).run(&mut out).await?;
    Ok(())
}
