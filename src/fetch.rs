//! Obtaining page markup: straight from disk for `file://` pages, via WebDriver otherwise

use std::fs;
use tracing::debug;
use url::Url;

use crate::errors::{LocatorError, Result};
use crate::webdriver::{Browser, BrowserType};

/// How to reach a WebDriver server when a page needs a browser
#[derive(Debug, Clone)]
pub struct WebDriverSettings {
    pub browser_type: BrowserType,
    pub webdriver_url: Option<String>,
    pub headless: bool,
}

impl Default for WebDriverSettings {
    fn default() -> Self {
        Self {
            browser_type: BrowserType::Firefox,
            webdriver_url: None,
            headless: true,
        }
    }
}

/// Fetches markup page by page, opening one browser session on first use
pub struct MarkupFetcher {
    settings: WebDriverSettings,
    browser: Option<Browser>,
}

impl MarkupFetcher {
    pub fn new(settings: WebDriverSettings) -> Self {
        Self {
            settings,
            browser: None,
        }
    }

    pub async fn fetch(&mut self, address: &str) -> Result<String> {
        let url = Url::parse(address).map_err(|_| LocatorError::InvalidAddress(address.to_string()))?;

        if url.scheme() == "file" {
            let path = url
                .to_file_path()
                .map_err(|_| LocatorError::InvalidAddress(address.to_string()))?;
            debug!("Reading markup from {}", path.display());
            return fs::read_to_string(&path).map_err(|e| LocatorError::fetch(address, e));
        }

        let browser = self.browser(address).await?;
        browser
            .page_source(address)
            .await
            .map_err(|e| LocatorError::fetch(address, format!("{:#}", e)))
    }

    async fn browser(&mut self, address: &str) -> Result<&Browser> {
        if self.browser.is_none() {
            let browser = Browser::connect(
                self.settings.browser_type,
                self.settings.webdriver_url.as_deref(),
                self.settings.headless,
            )
            .await
            .map_err(|e| LocatorError::fetch(address, format!("{:#}", e)))?;
            self.browser = Some(browser);
        }
        self.browser
            .as_ref()
            .ok_or_else(|| LocatorError::fetch(address, "browser session unavailable"))
    }

    /// Close the browser session, if one was opened
    pub async fn close(self) {
        if let Some(browser) = self.browser {
            let browser_type = browser.browser_type();
            if let Err(e) = browser.close().await {
                debug!("Error closing {:?} session: {}", browser_type, e);
            }
        }
    }
}
