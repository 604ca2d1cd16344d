// ==============================================================================
// walker.rs - Cursor Page Walker
// ==============================================================================
// Description: Follows PanelApp `next` links and streams every page to TSV
// Created: 2026-10-19
// Modified: 2026-10-19
// Version: 1.0.0
// ==============================================================================

use serde_json::Value;
use std::io::Write;
use tracing::{debug, info};

use crate::client::{EndpointFetcher, Transport};
use crate::error::{Result, ScraperError};
use crate::models::Page;
use crate::output::TsvWriter;

/// Totals for a completed walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Gene entities written
    pub records: usize,
    /// Pages fetched
    pub pages: usize,
}

/// Walks every page reachable from a start URL
pub struct PageWalker<T, W: Write> {
    fetcher: EndpointFetcher<T>,
    output: TsvWriter<W>,
}

impl<T: Transport, W: Write> PageWalker<T, W> {
    pub fn new(fetcher: EndpointFetcher<T>, output: TsvWriter<W>) -> Self {
        Self { fetcher, output }
    }

    /// Write the header, then every record of every page
    ///
    /// Pages are followed until `next` is null or absent. Each page is
    /// flushed before the next request, so rows written before a fatal
    /// error stay in the output.
    ///
    /// # Returns
    /// * `Ok(WalkSummary)` - Total records and pages
    /// * `Err(ScraperError::MissingResults)` - A page had no `results`
    /// * `Err(ScraperError::Http)` - A page kept failing after retries
    pub async fn run(&mut self, start_url: &str) -> Result<WalkSummary> {
        self.output.write_header()?;

        let mut summary = WalkSummary::default();
        let mut next_url = Some(start_url.to_string());

        while let Some(url) = next_url.take() {
            summary.pages += 1;
            let lookup = summary.pages;
            info!("Lookup {}", lookup);
            debug!("Fetching {}", url);

            let page = match self.fetcher.fetch_json(&url).await? {
                body @ Value::Object(_) => serde_json::from_value::<Page>(body)?,
                _ => return Err(ScraperError::MissingResults { url }),
            };
            let (records, next) = page.into_records(&url)?;

            let written = self.output.write_records(&records)?;
            info!("Processed {} gene entities for lookup {}", written, lookup);

            summary.records += written;
            next_url = next;
        }

        Ok(summary)
    }

    pub fn into_output(self) -> TsvWriter<W> {
        self.output
    }
}
