use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use locatorgen::batch::run_batch;
use locatorgen::config::BatchConfig;
use locatorgen::errors::LocatorError;
use locatorgen::fetch::MarkupFetcher;
use locatorgen::types::OutputFormat;

use crate::commands::utils;

pub async fn handle_batch(
    config: PathBuf,
    format: Option<OutputFormat>,
    browser: String,
    webdriver: Option<String>,
    no_headless: bool,
) -> Result<()> {
    let batch = BatchConfig::load(&config)?;
    let format = format.or(batch.format).unwrap_or_default();
    let total = batch.pages.len();
    info!("Executing batch of {} pages from {}", total, config.display());

    let mut fetcher =
        MarkupFetcher::new(utils::webdriver_settings(&browser, webdriver, no_headless)?);
    let outcomes = run_batch(batch.pages, &mut fetcher, format).await;
    fetcher.close().await;

    println!("{}", serde_json::to_string_pretty(&outcomes)?);

    let failed = outcomes.iter().filter(|outcome| !outcome.is_success()).count();
    eprintln!("\nBatch execution complete:");
    eprintln!("  ✓ {} pages succeeded", total - failed);
    if failed > 0 {
        eprintln!("  ✗ {} pages failed", failed);
        return Err(LocatorError::PartialBatch { failed, total }.into());
    }
    Ok(())
}
