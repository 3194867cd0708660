use anyhow::{Context, Result};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

use locatorgen::batch::process_page;
use locatorgen::config::is_valid_address;
use locatorgen::errors::LocatorError;
use locatorgen::fetch::MarkupFetcher;
use locatorgen::generate_locators;
use locatorgen::output::{artifact_path, render};
use locatorgen::types::{OutputFormat, PageTarget};

use crate::commands::utils;

#[allow(clippy::too_many_arguments)]
pub async fn handle_generate(
    url: String,
    html: Option<PathBuf>,
    output: PathBuf,
    format: OutputFormat,
    print: bool,
    browser: String,
    webdriver: Option<String>,
    no_headless: bool,
) -> Result<()> {
    info!("Generating locators for {}", url);

    if !is_valid_address(&url) {
        return Err(LocatorError::InvalidAddress(url).into());
    }

    let markup = match html {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|e| LocatorError::fetch(&url, e))
            .with_context(|| format!("Failed to read markup from {}", path.display()))?,
        None => {
            let mut fetcher =
                MarkupFetcher::new(utils::webdriver_settings(&browser, webdriver, no_headless)?);
            let fetched = fetcher.fetch(&url).await;
            fetcher.close().await;
            fetched?
        }
    };

    if print {
        let generated = generate_locators(&markup);
        print!("{}", render(&generated.locators, format)?);
        return Ok(());
    }

    let path = artifact_path(&output, &url, format)?;
    let target = PageTarget { url, output };
    let outcome = process_page(&target, path, &markup, format)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "url": outcome.url,
            "artifact": outcome.artifact,
            "entries": outcome.entries,
            "stats": outcome.stats,
        }))?
    );
    Ok(())
}
