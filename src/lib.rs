// ==============================================================================
// lib.rs - PanelApp Scraper Library
// ==============================================================================
// Description: Library interface for the PanelApp gene-panel TSV exporter
// Created: 2026-10-19
// Modified: 2026-10-19
// Version: 1.0.0
// ==============================================================================

pub mod client;
pub mod config;
pub mod ensembl;
pub mod error;
pub mod fields;
pub mod models;
pub mod output;
pub mod walker;

pub use config::{ScraperConfig, DEFAULT_BASE_URL};
pub use error::ScraperError;
pub use fields::{FieldLayout, FieldSelector, Variant};
pub use walker::{PageWalker, WalkSummary};
