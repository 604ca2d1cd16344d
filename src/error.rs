// ==============================================================================
// error.rs - Scraper Error Types
// ==============================================================================
// Description: Error taxonomy for fetching, paging and writing gene records
// Created: 2026-10-19
// Modified: 2026-10-19
// Version: 1.0.0
// ==============================================================================

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while exporting PanelApp gene records
#[derive(Error, Debug)]
pub enum ScraperError {
    /// Endpoint kept answering with a non-success status after all retries
    #[error("HTTP {status} for {url}")]
    Http { status: StatusCode, url: String },

    /// Page body has no `results` array (API contract changed)
    #[error("No results for {url}")]
    MissingResults { url: String },

    #[error("Request failed for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record {index} on {url} is not a JSON object")]
    InvalidRecord { index: usize, url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TSV writing error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ScraperError>;
