use super::*;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_is_valid_address() {
    assert!(is_valid_address("https://example.com"));
    assert!(is_valid_address("http://localhost:3000/login"));
    assert!(is_valid_address("file:///tmp/page.html"));

    assert!(!is_valid_address("example.com"));
    assert!(!is_valid_address("ftp://example.com/file"));
    assert!(!is_valid_address("file:///"));
    assert!(!is_valid_address(""));
    assert!(!is_valid_address("https://"));
}

#[test]
fn test_from_yaml() {
    let yaml = r#"
format: json
pages:
  - url: https://example.com/login
    output: out/login
  - url: https://example.com/cart
    output: out/cart
"#;
    let config = BatchConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.format, Some(OutputFormat::Json));
    assert_eq!(config.pages.len(), 2);
    assert_eq!(config.pages[1].url, "https://example.com/cart");
    assert_eq!(config.pages[1].output, PathBuf::from("out/cart"));
}

#[test]
fn test_from_yaml_without_format() {
    let config = BatchConfig::from_yaml("pages: []\n").unwrap();
    assert_eq!(config.format, None);
    assert!(config.pages.is_empty());
}

#[test]
fn test_from_yaml_missing_field() {
    let err = BatchConfig::from_yaml("pages:\n  - url: https://example.com\n").unwrap_err();
    assert!(matches!(err, LocatorError::Config(_)));
}

#[test]
fn test_from_csv_trims_fields() {
    let csv = "url, output\nhttps://example.com/a , out/a\n  https://example.com/b,out/b\n";
    let config = BatchConfig::from_csv(csv).unwrap();
    assert_eq!(
        config.pages,
        vec![
            PageTarget {
                url: "https://example.com/a".to_string(),
                output: PathBuf::from("out/a"),
            },
            PageTarget {
                url: "https://example.com/b".to_string(),
                output: PathBuf::from("out/b"),
            },
        ]
    );
}

#[test]
fn test_load_by_extension() {
    let temp_dir = TempDir::new().unwrap();

    let yaml_path = temp_dir.path().join("pages.yml");
    fs::write(&yaml_path, "pages:\n  - url: https://example.com\n    output: out\n").unwrap();
    assert_eq!(BatchConfig::load(&yaml_path).unwrap().pages.len(), 1);

    let json_path = temp_dir.path().join("pages.json");
    fs::write(
        &json_path,
        r#"{"format": "yaml", "pages": [{"url": "https://example.com", "output": "out"}]}"#,
    )
    .unwrap();
    let config = BatchConfig::load(&json_path).unwrap();
    assert_eq!(config.format, Some(OutputFormat::Yaml));

    let csv_path = temp_dir.path().join("pages.CSV");
    fs::write(&csv_path, "url,output\nhttps://example.com,out\n").unwrap();
    assert_eq!(BatchConfig::load(&csv_path).unwrap().pages.len(), 1);
}

#[test]
fn test_load_unsupported_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("pages.txt");
    fs::write(&path, "https://example.com\n").unwrap();

    let err = BatchConfig::load(&path).unwrap_err();
    assert!(matches!(err, LocatorError::Config(_)));
    assert_eq!(err.exit_code(), 5);
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = BatchConfig::load(&temp_dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, LocatorError::Config(_)));
}

#[test]
fn test_ensure_output_dir_creates_parents() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("a").join("b").join("c");

    ensure_output_dir(&nested).unwrap();
    assert!(nested.is_dir());
    // idempotent
    ensure_output_dir(&nested).unwrap();
}
