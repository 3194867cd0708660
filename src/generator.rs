//! One locator-generation run: markup in, frozen locator map out

use scraper::Html;
use tracing::{debug, info};

use crate::collision::DuplicateNameCounter;
use crate::store::{LocatorMap, LocatorStore};
use crate::types::RunStats;
use crate::walker::walk;

/// Mutable state of a single run. Never shared between pages.
#[derive(Debug, Default)]
pub struct RunContext {
    store: LocatorStore,
    counter: DuplicateNameCounter,
    pub stats: RunStats,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a locator, renaming it if the name is already taken
    pub fn insert(&mut self, name: &str, xpath: String) {
        let unique = self.store.insert(&mut self.counter, name, xpath);
        if unique != name {
            debug!("Renamed duplicate locator {} to {}", name, unique);
            self.stats.renamed += 1;
        }
    }

    pub fn finish(self) -> GeneratedLocators {
        GeneratedLocators {
            locators: self.store.freeze(),
            stats: self.stats,
        }
    }
}

/// Output of one run
#[derive(Debug, Clone)]
pub struct GeneratedLocators {
    pub locators: LocatorMap,
    pub stats: RunStats,
}

/// Parse `markup` and derive a named locator for every meaningful element
pub fn generate_locators(markup: &str) -> GeneratedLocators {
    let document = Html::parse_document(markup);
    let mut ctx = RunContext::new();
    walk(&document, &mut ctx);

    let generated = ctx.finish();
    info!(
        "Generated {} locators ({} visited, {} suppressed, {} dropped, {} failed)",
        generated.locators.len(),
        generated.stats.visited,
        generated.stats.suppressed,
        generated.stats.dropped,
        generated.stats.failed
    );
    generated
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;
