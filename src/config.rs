// ==============================================================================
// config.rs - Scraper Configuration
// ==============================================================================
// Description: Resolved run settings and construction of the export pipeline
// Created: 2026-10-19
// Modified: 2026-10-19
// Version: 1.0.0
// ==============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::client::{EndpointFetcher, ReqwestTransport, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT};
use crate::fields::{FieldLayout, Variant};
use crate::output::TsvWriter;
use crate::walker::PageWalker;

/// First page of the PanelApp genes endpoint
pub const DEFAULT_BASE_URL: &str = "https://panelapp.genomicsengland.co.uk/api/v1/genes/?format=json";

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub base_url: Url,
    pub variant: Variant,
    pub timeout: Duration,
    pub max_retries: u32,
    /// TSV destination; stdout when `None`
    pub output: Option<PathBuf>,
}

impl ScraperConfig {
    pub fn new(base_url: Url, variant: Variant) -> Self {
        Self {
            base_url,
            variant,
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            output: None,
        }
    }

    pub fn layout(&self) -> FieldLayout {
        FieldLayout::for_variant(self.variant)
    }

    pub fn fetcher(&self) -> Result<EndpointFetcher<ReqwestTransport>, reqwest::Error> {
        let transport = ReqwestTransport::new(self.timeout)?;
        Ok(EndpointFetcher::new(transport).with_max_retries(self.max_retries))
    }

    /// Build the live walker: reqwest transport feeding the configured sink
    pub fn walker(&self) -> anyhow::Result<PageWalker<ReqwestTransport, Box<dyn Write>>> {
        let fetcher = self.fetcher()?;
        let output = TsvWriter::open(self.output.as_deref(), self.layout())?;
        Ok(PageWalker::new(fetcher, output))
    }
}
