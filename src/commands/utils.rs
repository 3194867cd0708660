use anyhow::Result;

use locatorgen::fetch::WebDriverSettings;

/// Build WebDriver settings from the shared command-line flags
pub fn webdriver_settings(
    browser: &str,
    webdriver: Option<String>,
    no_headless: bool,
) -> Result<WebDriverSettings> {
    Ok(WebDriverSettings {
        browser_type: browser.parse()?,
        webdriver_url: webdriver,
        headless: !no_headless,
    })
}
