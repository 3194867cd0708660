#[cfg(test)]
mod tests {
    use crate::commands::utils::webdriver_settings;
    use locatorgen::BrowserType;

    #[test]
    fn test_webdriver_settings_from_flags() {
        let settings = webdriver_settings("Chrome", None, false).unwrap();
        assert_eq!(settings.browser_type, BrowserType::Chrome);
        assert!(settings.headless);
        assert!(settings.webdriver_url.is_none());

        let settings =
            webdriver_settings("firefox", Some("http://localhost:4445".to_string()), true)
                .unwrap();
        assert_eq!(settings.browser_type, BrowserType::Firefox);
        assert!(!settings.headless);
        assert_eq!(
            settings.webdriver_url.as_deref(),
            Some("http://localhost:4445")
        );
    }

    #[test]
    fn test_webdriver_settings_rejects_unknown_browser() {
        let err = webdriver_settings("netscape", None, false).unwrap_err();
        assert!(err.to_string().contains("Unsupported browser"));
    }

    #[test]
    fn test_default_webdriver_urls() {
        assert_eq!(
            BrowserType::Firefox.default_webdriver_url(),
            "http://localhost:4444"
        );
        assert_eq!(
            BrowserType::Chrome.default_webdriver_url(),
            "http://localhost:9515"
        );
    }
}
