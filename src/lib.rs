//! # locatorgen
#![allow(clippy::uninlined_format_args)]
//!
//! CLI tool that turns a page's markup into named XPath locators for UI test automation.
//!
//! Every meaningful element of the page gets a human-readable, collision-free
//! camel-cased name (`submitButton`, `forgotPasswordLink`, `homeSvgIcon`) and an
//! XPath expression that addresses it. The result is written as a YAML (or JSON)
//! mapping, one artifact per page.
//!
//! ## CLI Usage
//!
//! ```bash
//! # Generate locators for a live page (needs a running geckodriver/chromedriver)
//! locatorgen generate "https://example.com/login" --output ./locators
//!
//! # Use markup saved on disk; the URL only names the artifact
//! locatorgen generate "https://example.com/login" --html login.html --output ./locators
//!
//! # Print the mapping instead of writing it
//! locatorgen generate "file:///tmp/login.html" --print --format json
//!
//! # Process a page list (YAML, JSON or CSV)
//! locatorgen batch pages.yaml --browser chrome
//! ```
//!
//! A page list looks like:
//!
//! ```yaml
//! format: yaml
//! pages:
//!   - url: https://example.com/login
//!     output: ./locators
//! ```
//!
//! ## Library Usage
//!
//! ```
//! use locatorgen::generate_locators;
//!
//! let generated = generate_locators(r#"<button aria-label="Submit Form">Submit</button>"#);
//! assert_eq!(
//!     generated.locators.get("submitButton"),
//!     Some("//button[contains(text(),'Submit')]")
//! );
//! ```
//!
//! ## How names and locators are chosen
//!
//! - Tags are walked in a fixed order: `svg` and `ion-icon` first, then
//!   interactive/text tags (`a`, `button`, headings, `input`, `textarea`,
//!   `td`, `th`), then layout tags. Layout tags nested in an interactive
//!   element are skipped.
//! - The locator comes from the element's own text, then a list of key
//!   attributes, icon-font classes, the class attribute, icon data attributes
//!   and finally id/name/value/role.
//! - Duplicate names get a running numeric suffix; duplicate XPaths are
//!   rewritten as `(<xpath>)[k]`.

/// Batch processing of page lists
pub mod batch;

/// Name and value collision resolution
pub mod collision;

/// Page lists, address validation, output directories
pub mod config;

/// DOM element view over parsed markup
pub mod dom;

/// Error types and exit codes
pub mod errors;

/// Obtaining page markup
pub mod fetch;

/// Generation runs
pub mod generator;

/// `svg` / `ion-icon` locators
pub mod icons;

/// Identifier synthesis
pub mod naming;

/// Artifact naming and serialization
pub mod output;

/// Attribute selection cascade
pub mod selector;

/// Ordered locator storage
pub mod store;

/// Shared data types
pub mod types;

/// Priority-ordered DOM traversal
pub mod walker;

/// WebDriver browser sessions
pub mod webdriver;

pub use errors::LocatorError;
pub use generator::{GeneratedLocators, RunContext, generate_locators};
pub use store::{LocatorMap, LocatorStore};
pub use types::{LocatorEntry, OutputFormat, PageOutcome, PageTarget, RunStats};
pub use webdriver::{Browser, BrowserType};
