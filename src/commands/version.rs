use anyhow::Result;
use serde_json::json;

pub async fn handle_version() -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const NAME: &str = env!("CARGO_PKG_NAME");

    let info = json!({
        "name": NAME,
        "version": VERSION,
        "formats": ["yaml", "json"],
        "page_lists": ["yaml", "json", "csv"],
    });
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
