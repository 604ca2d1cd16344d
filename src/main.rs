// ==============================================================================
// main.rs - PanelApp Scraper Entry Point
// ==============================================================================
// Description: Exports every PanelApp gene-panel entry as TSV on stdout
// Created: 2026-10-19
// Modified: 2026-10-19
// Version: 1.0.0
// ==============================================================================

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use url::Url;

use panelapp_scraper::{ScraperConfig, Variant, DEFAULT_BASE_URL};

/// Export options
///
/// Every option is optional: with no flags and no environment variables the
/// full PanelApp gene list is exported with the basic columns to stdout.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First page of the genes endpoint
    #[arg(long, env = "PANELAPP_URL", default_value = DEFAULT_BASE_URL)]
    url: Url,

    /// Column set to export
    #[arg(long, env = "PANELAPP_VARIANT", value_enum, default_value_t = Variant::Basic)]
    variant: Variant,

    /// Per-request timeout in seconds
    #[arg(long, env = "PANELAPP_TIMEOUT_SECS", default_value_t = 5)]
    timeout_secs: u64,

    /// Retries after a non-success HTTP status
    #[arg(long, env = "PANELAPP_MAX_RETRIES", default_value_t = 3)]
    max_retries: u32,

    /// Write TSV to this file instead of stdout
    #[arg(short, long, env = "PANELAPP_OUTPUT")]
    output: Option<PathBuf>,
}

/// `RUST_LOG` as currently set in the environment, else info for this crate
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| "panelapp_scraper=info".into())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env first so RUST_LOG and PANELAPP_* from it apply
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the TSV
    tracing_subscriber::registry()
        .with(log_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = ScraperConfig::new(args.url, args.variant);
    config.timeout = Duration::from_secs(args.timeout_secs);
    config.max_retries = args.max_retries;
    config.output = args.output;

    info!("PanelApp scraper starting ({:?} variant)", config.variant);

    let mut walker = config.walker().context("Failed to set up export")?;
    let summary = walker.run(config.base_url.as_str()).await?;

    info!(
        "Finished processing {} gene entities ({} pages)",
        summary.records, summary.pages
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_rust_log_from_env_file_reaches_filter() {
        let mut env_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(env_file, "RUST_LOG=panelapp_scraper=debug").unwrap();

        dotenvy::from_path_override(env_file.path()).unwrap();
        assert_eq!(log_filter().to_string(), "panelapp_scraper=debug");
    }

    #[test]
    fn test_no_flags_reproduce_default_export() {
        let args = Args::try_parse_from(["panelapp-scraper"]).unwrap();
        assert_eq!(args.url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(args.variant, Variant::Basic);
        assert_eq!(args.timeout_secs, 5);
        assert_eq!(args.max_retries, 3);
        assert!(args.output.is_none());
    }
}
