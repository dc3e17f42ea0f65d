//! CLI command implementations.

pub(crate) mod average;
pub(crate) mod closest;
pub(crate) mod list;

use anyhow::{Context, Result};
use countypop_lib::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

/// Builds the HTTP client configuration from the global `--timeout` /
/// `--retries` flags.
pub(crate) fn client_config(timeout_secs: u64, retries: u32) -> ClientConfig {
    ClientConfig {
        timeout: Duration::from_secs(timeout_secs),
        max_retries: retries,
        ..Default::default()
    }
}

/// Picks the record source from the global `--url` / `--input` flags.
pub(crate) fn record_source(
    url: Option<String>,
    input: Option<PathBuf>,
    config: ClientConfig,
) -> Result<Box<dyn RecordSource>> {
    if let Some(path) = input {
        return Ok(Box::new(FileSource::new(path)));
    }

    let client = FetchClient::new(config).context("Failed to create HTTP client")?;
    let url = url.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    Ok(Box::new(HttpSource::new(client, url)))
}

/// Loads all records from `source` into a query engine.
pub(crate) async fn load_query(source: &dyn RecordSource, quiet: bool) -> Result<CountyQuery> {
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .expect("Invalid progress template"),
        );
        pb.set_message(format!("Loading county records from {}", source.describe()));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };

    let records = source
        .load()
        .await
        .with_context(|| format!("Failed to load county records from {}", source.describe()));
    progress.finish_and_clear();

    let query = CountyQuery::new(records?);
    tracing::info!(
        records = query.len(),
        years = ?query.years(),
        "county records loaded"
    );
    Ok(query)
}
