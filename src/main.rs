#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use locatorgen::errors;
use locatorgen::types::OutputFormat;

mod commands;

// Exit codes
const EXIT_SUCCESS: i32 = 0;

#[derive(Parser)]
#[command(name = "locatorgen")]
#[command(about = "Generate named XPath locators from page markup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate locators for a single page
    Generate {
        /// Page address (http, https or file URL)
        url: String,

        /// Read markup from this file instead of fetching the page
        #[arg(long)]
        html: Option<PathBuf>,

        /// Directory the artifact is written to
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Artifact format
        #[arg(short, long, default_value = "yaml")]
        format: OutputFormat,

        /// Print the mapping to stdout instead of writing an artifact
        #[arg(long)]
        print: bool,

        /// Browser to use for http(s) pages
        #[arg(short, long, default_value = "firefox")]
        browser: String,

        /// WebDriver endpoint (defaults to the browser's standard port)
        #[arg(long)]
        webdriver: Option<String>,

        /// Run browser in visible mode (disables headless)
        #[arg(long = "no-headless")]
        no_headless: bool,
    },

    /// Generate locators for every page of a YAML, JSON or CSV page list
    Batch {
        /// Page list file
        config: PathBuf,

        /// Artifact format (overrides the page list)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Browser to use for http(s) pages
        #[arg(short, long, default_value = "firefox")]
        browser: String,

        /// WebDriver endpoint (defaults to the browser's standard port)
        #[arg(long)]
        webdriver: Option<String>,

        /// Run browser in visible mode (disables headless)
        #[arg(long = "no-headless")]
        no_headless: bool,
    },

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() {
    match run().await {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(err) => {
            let exit_code = errors::exit_code_for(&err);

            // Output JSON error to stdout for programmatic consumption
            let error_json = json!({
                "error": true,
                "message": format!("{:#}", err),
                "exit_code": exit_code
            });
            println!(
                "{}",
                serde_json::to_string(&error_json).unwrap_or_else(|_| "{}".to_string())
            );

            // Also log to stderr for human reading
            eprintln!("Error: {:#}", err);
            std::process::exit(exit_code);
        }
    }
}

async fn run() -> Result<()> {
    // Initialize tracing to stderr (so output to stdout remains clean)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "locatorgen=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            url,
            html,
            output,
            format,
            print,
            browser,
            webdriver,
            no_headless,
        } => {
            commands::generate::handle_generate(
                url,
                html,
                output,
                format,
                print,
                browser,
                webdriver,
                no_headless,
            )
            .await?
        }

        Commands::Batch {
            config,
            format,
            browser,
            webdriver,
            no_headless,
        } => {
            commands::batch::handle_batch(config, format, browser, webdriver, no_headless).await?
        }

        Commands::Version => commands::version::handle_version().await?,
    }

    Ok(())
}
