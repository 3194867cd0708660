// Unit tests for types module

use super::*;

#[test]
fn test_output_format_extension() {
    assert_eq!(OutputFormat::Yaml.extension(), "yaml");
    assert_eq!(OutputFormat::Json.extension(), "json");
    assert_eq!(OutputFormat::default(), OutputFormat::Yaml);
}

#[test]
fn test_output_format_serde_lowercase() {
    let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
    assert_eq!(format, OutputFormat::Json);
    assert_eq!(serde_json::to_string(&OutputFormat::Yaml).unwrap(), "\"yaml\"");
}

#[test]
fn test_page_outcome_failed() {
    let outcome = PageOutcome::failed("not-a-url", "Invalid page address: not-a-url");
    assert!(!outcome.is_success());
    assert_eq!(outcome.entries, 0);
    assert!(outcome.artifact.is_none());

    // Optional fields are left out of the JSON report
    let json = serde_json::to_value(&outcome).unwrap();
    assert!(json.get("artifact").is_none());
    assert!(json.get("stats").is_none());
    assert_eq!(json["error"], "Invalid page address: not-a-url");
}

#[test]
fn test_page_target_deserialize() {
    let target: PageTarget =
        serde_json::from_str(r#"{"url": "https://example.com", "output": "out"}"#).unwrap();
    assert_eq!(target.url, "https://example.com");
    assert_eq!(target.output, PathBuf::from("out"));
}
