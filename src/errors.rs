use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating, fetching, or writing locators
#[derive(Debug, Error)]
pub enum LocatorError {
    /// Page address failed syntactic validation (exit code 2)
    #[error("Invalid page address: {0}")]
    InvalidAddress(String),

    /// Icon-font class matched a marker but carries no name segment after it
    #[error("Malformed icon marker '{marker}' in class '{class}'")]
    MalformedIconMarker { class: String, marker: String },

    /// Page markup could not be obtained (exit code 3)
    #[error("Failed to fetch markup for {url}: {message}")]
    Fetch { url: String, message: String },

    /// Artifact could not be written or read back (exit code 4)
    #[error("Failed to serialize locators to {}: {message}", path.display())]
    Serialization { path: PathBuf, message: String },

    /// Locator mapping could not be rendered or parsed (exit code 4)
    #[error("Failed to encode locators: {0}")]
    Encoding(String),

    /// Page list could not be loaded (exit code 5)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Some pages of a batch failed (exit code 6)
    #[error("{failed} of {total} pages failed")]
    PartialBatch { failed: usize, total: usize },
}

impl LocatorError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LocatorError::InvalidAddress(_) => 2,
            LocatorError::Fetch { .. } => 3,
            LocatorError::Serialization { .. } | LocatorError::Encoding(_) => 4,
            LocatorError::Config(_) => 5,
            LocatorError::PartialBatch { .. } => 6,
            LocatorError::MalformedIconMarker { .. } => 1,
        }
    }

    pub fn serialization(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        LocatorError::Serialization {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn encoding(err: impl std::fmt::Display) -> Self {
        LocatorError::Encoding(err.to_string())
    }

    pub fn fetch(url: &str, err: impl std::fmt::Display) -> Self {
        LocatorError::Fetch {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

/// Exit code for an arbitrary command error
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<LocatorError>())
        .map(LocatorError::exit_code)
        .unwrap_or(1)
}

pub type Result<T> = std::result::Result<T, LocatorError>;
