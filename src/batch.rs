//! Processing a list of pages, one independent run per page

use std::collections::HashSet;
use std::path::PathBuf;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::config::{ensure_output_dir, is_valid_address};
use crate::errors::{LocatorError, Result};
use crate::fetch::MarkupFetcher;
use crate::generator::generate_locators;
use crate::output::{artifact_path, write_artifact};
use crate::types::{OutputFormat, PageOutcome, PageTarget};

/// Generate and write the artifact for one page whose markup is already fetched
pub fn process_page(
    target: &PageTarget,
    path: PathBuf,
    markup: &str,
    format: OutputFormat,
) -> Result<PageOutcome> {
    ensure_output_dir(&target.output)?;

    let generated = generate_locators(markup);
    write_artifact(&path, &generated.locators, format)?;

    Ok(PageOutcome {
        url: target.url.clone(),
        artifact: Some(path),
        entries: generated.locators.len(),
        stats: Some(generated.stats),
        error: None,
    })
}

/// Artifact path of every page, in input order.
///
/// A page whose address is invalid, or whose path was already claimed by an
/// earlier page, gets an error instead.
pub fn claim_artifact_paths(targets: &[PageTarget], format: OutputFormat) -> Vec<Result<PathBuf>> {
    let mut claimed = HashSet::new();
    targets
        .iter()
        .map(|target| {
            if !is_valid_address(&target.url) {
                return Err(LocatorError::InvalidAddress(target.url.clone()));
            }
            let path = artifact_path(&target.output, &target.url, format)?;
            if !claimed.insert(path.clone()) {
                return Err(LocatorError::serialization(
                    &path,
                    "artifact already claimed by an earlier page",
                ));
            }
            Ok(path)
        })
        .collect()
}

/// Process every page, returning one outcome per page in input order.
///
/// Markup is fetched sequentially; generation and writing run in parallel on
/// the blocking pool. A failing page never stops the others.
pub async fn run_batch(
    targets: Vec<PageTarget>,
    fetcher: &mut MarkupFetcher,
    format: OutputFormat,
) -> Vec<PageOutcome> {
    let urls: Vec<String> = targets.iter().map(|target| target.url.clone()).collect();
    let paths = claim_artifact_paths(&targets, format);
    let mut outcomes: Vec<Option<PageOutcome>> = vec![None; targets.len()];
    let mut tasks = JoinSet::new();

    for (index, (target, path)) in targets.into_iter().zip(paths).enumerate() {
        let path = match path {
            Ok(path) => path,
            Err(err) => {
                error!("Skipping {}: {}", target.url, err);
                outcomes[index] = Some(PageOutcome::failed(&target.url, err));
                continue;
            }
        };

        info!("Processing {}", target.url);
        let markup = match fetcher.fetch(&target.url).await {
            Ok(markup) => markup,
            Err(e) => {
                warn!("{}", e);
                outcomes[index] = Some(PageOutcome::failed(&target.url, e));
                continue;
            }
        };

        tasks.spawn_blocking(move || {
            let outcome = process_page(&target, path, &markup, format)
                .unwrap_or_else(|e| PageOutcome::failed(&target.url, e));
            (index, outcome)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, outcome)) => {
                if let Some(message) = &outcome.error {
                    warn!("{}: {}", outcome.url, message);
                }
                outcomes[index] = Some(outcome);
            }
            Err(e) => error!("Generation task failed: {}", e),
        }
    }

    outcomes
        .into_iter()
        .zip(urls)
        .map(|(outcome, url)| {
            outcome.unwrap_or_else(|| PageOutcome::failed(url, "generation task aborted"))
        })
        .collect()
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod batch_test;
