// ==============================================================================
// models.rs - PanelApp Data Models
// ==============================================================================
// Description: Page envelope and gene record view for the PanelApp genes API
// Created: 2026-10-19
// Modified: 2026-10-19
// Version: 1.0.0
// ==============================================================================

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Result, ScraperError};

/// One page of the cursor-paginated genes endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Gene-panel entries on this page (`None` when the key is absent or null)
    #[serde(default)]
    pub results: Option<Vec<Value>>,

    /// Absolute URL of the following page, null on the last page
    #[serde(default)]
    pub next: Option<String>,
}

impl Page {
    /// Validate the page body and split it into records and the next cursor
    ///
    /// # Returns
    /// * `Ok((records, next))` - Records in API order and the next page URL
    /// * `Err(ScraperError::MissingResults)` - Page has no `results` array
    /// * `Err(ScraperError::InvalidRecord)` - An entry is not a JSON object
    pub fn into_records(self, url: &str) -> Result<(Vec<GeneRecord>, Option<String>)> {
        let results = self.results.ok_or_else(|| ScraperError::MissingResults {
            url: url.to_string(),
        })?;

        let records = results
            .into_iter()
            .enumerate()
            .map(|(index, value)| match value {
                Value::Object(map) => Ok(GeneRecord::new(map)),
                _ => Err(ScraperError::InvalidRecord {
                    index,
                    url: url.to_string(),
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((records, self.next))
    }
}

/// A single gene-panel association entry
///
/// The API adds fields over time, so records are kept as a JSON object
/// (key order as received) and projected through `FieldLayout`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneRecord {
    fields: Map<String, Value>,
}

impl GeneRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Top-level value, e.g. `confidence_level`
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Value inside a nested object, e.g. `gene_data.hgnc_symbol`
    pub fn get_nested(&self, field: &str, sub_field: &str) -> Option<&Value> {
        self.fields.get(field)?.as_object()?.get(sub_field)
    }

    /// Nested object `gene_data`, if present
    pub fn gene_data(&self) -> Option<&Map<String, Value>> {
        self.fields.get("gene_data")?.as_object()
    }
}

/// Cell text for a JSON null, as in existing PanelApp exports
pub const NULL_CELL: &str = "None";

/// Render a JSON value as a single TSV cell
///
/// Strings are emitted as is, arrays are joined with commas in their
/// original order, null renders as `None` and booleans as `True`/`False`.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(render_scalar)
            .collect::<Vec<_>>()
            .join(","),
        other => render_scalar(other),
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => NULL_CELL.to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        // Nested containers have no flat form; keep them lossless
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
