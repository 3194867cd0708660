use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Format of the written locator artifact
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// YAML mapping, one `name: xpath` line per locator
    #[default]
    Yaml,
    /// JSON object
    Json,
}

impl OutputFormat {
    /// File extension used for artifacts in this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }
}

/// A single named locator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorEntry {
    /// Camel-cased identifier, unique within one run
    pub name: String,
    /// XPath expression addressing the element
    pub xpath: String,
}

impl LocatorEntry {
    pub fn new(name: impl Into<String>, xpath: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            xpath: xpath.into(),
        }
    }
}

/// Counters collected during one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Whitelisted elements considered by the walker
    pub visited: usize,
    /// Low-priority elements skipped under a high-priority ancestor
    pub suppressed: usize,
    /// Elements with no locating signal
    pub dropped: usize,
    /// Elements whose generation failed (malformed icon markers)
    pub failed: usize,
    /// Names that needed a numeric suffix
    pub renamed: usize,
    /// Names recovered from a descendant
    pub rescued: usize,
}

/// One page to process and the directory its artifact goes to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTarget {
    /// Page address
    pub url: String,
    /// Output directory
    pub output: PathBuf,
}

/// Result of processing one page of a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageOutcome {
    /// Page address
    pub url: String,
    /// Written artifact, if the page succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<PathBuf>,
    /// Number of locators written
    pub entries: usize,
    /// Run counters, if generation ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<RunStats>,
    /// Failure message, if the page failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PageOutcome {
    pub fn failed(url: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            url: url.into(),
            artifact: None,
            entries: 0,
            stats: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
