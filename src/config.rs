//! Page lists and the small collaborators around a run

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;
use url::Url;

use crate::errors::{LocatorError, Result};
use crate::types::{OutputFormat, PageTarget};

/// A batch of pages to generate locators for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Artifact format; overridden by `--format` on the command line
    #[serde(default)]
    pub format: Option<OutputFormat>,
    /// Pages to process, in order
    #[serde(default)]
    pub pages: Vec<PageTarget>,
}

impl BatchConfig {
    /// Load a page list from YAML (`.yaml`/`.yml`), JSON (`.json`) or CSV (`.csv`)
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let content = fs::read_to_string(path)
            .map_err(|e| LocatorError::Config(format!("{}: {}", path.display(), e)))?;

        let config = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml(&content)?,
            "json" => serde_json::from_str(&content)
                .map_err(|e| LocatorError::Config(format!("{}: {}", path.display(), e)))?,
            "csv" => Self::from_csv(&content)?,
            other => {
                return Err(LocatorError::Config(format!(
                    "Unsupported page list format '{}' (use .yaml, .json or .csv)",
                    other
                )));
            }
        };

        debug!("Loaded {} pages from {}", config.pages.len(), path.display());
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| LocatorError::Config(e.to_string()))
    }

    /// Parse `url,output` records; the first row is the header
    pub fn from_csv(content: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let pages = reader
            .deserialize::<PageTarget>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| LocatorError::Config(e.to_string()))?;

        Ok(Self {
            format: None,
            pages,
        })
    }
}

/// Whether `address` is a page address the tool can process
pub fn is_valid_address(address: &str) -> bool {
    match Url::parse(address) {
        Ok(url) => match url.scheme() {
            "http" | "https" => url.host_str().is_some_and(|host| !host.is_empty()),
            "file" => url.path().len() > 1,
            _ => false,
        },
        Err(_) => false,
    }
}

/// Create the output directory (and parents) if it does not exist
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| LocatorError::serialization(path, e))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
