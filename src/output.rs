//! Artifact naming, writing and reading

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use url::Url;

use crate::errors::{LocatorError, Result};
use crate::store::LocatorMap;
use crate::types::OutputFormat;

/// Stem used when an address reduces to nothing
const FALLBACK_STEM: &str = "Page";

/// File stem for a page address.
///
/// The scheme, a leading `www.`, the last label of the host (the domain suffix)
/// and all punctuation are stripped; the first character is capitalized.
/// `https://www.example.com/user/login` becomes `Exampleuserlogin`.
pub fn artifact_stem(address: &str) -> Result<String> {
    let url = Url::parse(address).map_err(|_| LocatorError::InvalidAddress(address.to_string()))?;

    let host = url.host_str().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);
    let host = match host.rsplit_once('.') {
        Some((name, _suffix)) => name,
        None => host,
    };

    let mut raw = String::from(host);
    raw.push_str(url.path());
    if let Some(query) = url.query() {
        raw.push_str(query);
    }

    let mut chars = raw.chars().filter(|c| c.is_alphanumeric());
    let stem: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => FALLBACK_STEM.to_string(),
    };
    Ok(stem)
}

/// Full artifact path for a page inside `output_dir`
pub fn artifact_path(output_dir: &Path, address: &str, format: OutputFormat) -> Result<PathBuf> {
    let stem = artifact_stem(address)?;
    Ok(output_dir.join(format!("{}.{}", stem, format.extension())))
}

/// Render the mapping in the requested format
pub fn render(locators: &LocatorMap, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(locators).map_err(LocatorError::encoding)?,
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(locators).map_err(LocatorError::encoding)?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}

/// Parse a rendered mapping back
pub fn parse(content: &str, format: OutputFormat) -> Result<LocatorMap> {
    match format {
        OutputFormat::Yaml => serde_yaml::from_str(content).map_err(LocatorError::encoding),
        OutputFormat::Json => serde_json::from_str(content).map_err(LocatorError::encoding),
    }
}

/// Write the mapping to `path`; the parent directory must already exist
pub fn write_artifact(path: &Path, locators: &LocatorMap, format: OutputFormat) -> Result<()> {
    let content = render(locators, format).map_err(|e| LocatorError::serialization(path, e))?;
    fs::write(path, content).map_err(|e| LocatorError::serialization(path, e))?;
    info!("Wrote {} locators to {}", locators.len(), path.display());
    Ok(())
}

/// Read an artifact written by [`write_artifact`]
pub fn read_artifact(path: &Path, format: OutputFormat) -> Result<LocatorMap> {
    let content = fs::read_to_string(path).map_err(|e| LocatorError::serialization(path, e))?;
    parse(&content, format).map_err(|e| LocatorError::serialization(path, e))
}

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;
