// Common test utilities and fixtures

use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Mock HTML pages for testing
pub mod fixtures {
    pub const LOGIN_PAGE: &str = r#"
    <!DOCTYPE html>
    <html>
    <head><title>Login</title></head>
    <body>
        <h1>Sign in</h1>
        <form>
            <label for="user">Username</label>
            <input id="user" placeholder="Username">
            <input id="pass" type="password" aria-label="Password">
            <button type="submit"><span>Log in</span></button>
        </form>
        <a href="/forgot">Forgot password?</a>
    </body>
    </html>
    "#;

    pub const NAV_PAGE: &str = r#"
    <!DOCTYPE html>
    <html>
    <head><title>Navigation</title></head>
    <body>
        <nav><a href="/">Home</a></nav>
        <main>
            <svg class="icon-menu"></svg>
            <i class="fa fa-user"></i>
        </main>
        <footer><a href="/">Home</a></footer>
    </body>
    </html>
    "#;

    #[allow(dead_code)]
    pub const EMPTY_PAGE: &str = r#"
    <!DOCTYPE html>
    <html>
    <head><title>Empty</title></head>
    <body><div class="spacer"></div></body>
    </html>
    "#;
}

/// Helper to create a test HTML file
#[allow(dead_code)]
pub fn create_test_html(content: &str) -> PathBuf {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("test.html");
    std::fs::write(&file_path, content).expect("Failed to write test HTML");

    // Leak the temp_dir to keep it alive for the test
    std::mem::forget(temp_dir);
    file_path
}

/// `file://` address for a path on disk
#[allow(dead_code)]
pub fn file_url(path: &Path) -> String {
    url::Url::from_file_path(path)
        .expect("absolute path")
        .to_string()
}

/// Helper to run locatorgen CLI commands
pub fn run_locatorgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_locatorgen"))
        .args(args)
        .env("RUST_LOG", "locatorgen=warn")
        .output()
        .expect("Failed to execute locatorgen command")
}

/// First JSON document printed to stdout
#[allow(dead_code)]
pub fn first_json(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::Deserializer::from_str(&stdout)
        .into_iter::<Value>()
        .next()
        .expect("stdout should contain JSON")
        .expect("stdout JSON should parse")
}

/// Last JSON document printed to stdout (the error report on failure)
#[allow(dead_code)]
pub fn last_json(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::Deserializer::from_str(&stdout)
        .into_iter::<Value>()
        .filter_map(|value| value.ok())
        .last()
        .expect("stdout should contain JSON")
}
