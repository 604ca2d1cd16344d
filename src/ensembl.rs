// ==============================================================================
// ensembl.rs - Ensembl Cross-Reference Resolution
// ==============================================================================
// Description: Picks the latest Ensembl gene ID per genome assembly
// Created: 2026-10-19
// Modified: 2026-10-19
// Version: 1.0.0
// ==============================================================================
// Format: gene_data.ensembl_genes as returned by PanelApp
// Example:
//   "ensembl_genes": {
//     "GRch37": {"82": {"location": "1:123-456", "ensembl_id": "ENSG00000123"}},
//     "GRch38": {"90": {"location": "1:223-556", "ensembl_id": "ENSG00000123"}}
//   }
// ==============================================================================

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::models::GeneRecord;

/// Assembly label used by PanelApp for GRCh37
pub const GRCH37_LABEL: &str = "GRch37";
/// Assembly label used by PanelApp for GRCh38
pub const GRCH38_LABEL: &str = "GRch38";

/// Placeholder ID when an assembly has no Ensembl entry
pub const MISSING_ID: &str = "-";

/// Column names appended to the header, in row order
pub const XREF_COLUMNS: [&str; 4] = [
    "GRCh37_version",
    "GRCh38_version",
    "GRCh37_ensembl_id",
    "GRCh38_ensembl_id",
];

/// One version-keyed entry under an assembly block
#[derive(Debug, Clone, Deserialize)]
struct EnsemblEntry {
    ensembl_id: String,
}

/// Latest Ensembl gene ID for a single assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyRef {
    pub version: u64,
    pub ensembl_id: String,
}

impl Default for AssemblyRef {
    fn default() -> Self {
        Self {
            version: 0,
            ensembl_id: MISSING_ID.to_string(),
        }
    }
}

/// Resolved cross references for one gene record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnsemblXrefs {
    pub grch37: AssemblyRef,
    pub grch38: AssemblyRef,
}

impl EnsemblXrefs {
    /// Resolve the latest Ensembl IDs for both assemblies
    ///
    /// Records without `gene_data.ensembl_genes` (or without a block for an
    /// assembly) keep the defaults: version `0`, ID `"-"`.
    pub fn resolve(record: &GeneRecord) -> Self {
        let blocks = record
            .gene_data()
            .and_then(|gene_data| gene_data.get("ensembl_genes"))
            .and_then(Value::as_object);

        let Some(blocks) = blocks else {
            return Self::default();
        };

        Self {
            grch37: blocks
                .get(GRCH37_LABEL)
                .and_then(Value::as_object)
                .map(latest_version)
                .unwrap_or_default(),
            grch38: blocks
                .get(GRCH38_LABEL)
                .and_then(Value::as_object)
                .map(latest_version)
                .unwrap_or_default(),
        }
    }

    /// Fields in column order: GRCh37 version, GRCh38 version, GRCh37 ID, GRCh38 ID
    pub fn to_fields(&self) -> [String; 4] {
        [
            self.grch37.version.to_string(),
            self.grch38.version.to_string(),
            self.grch37.ensembl_id.clone(),
            self.grch38.ensembl_id.clone(),
        ]
    }
}

/// Highest-versioned entry of one assembly block
///
/// Entries are visited in document order and a version equal to the best so
/// far replaces it, so among equal versions the last entry wins.
fn latest_version(block: &Map<String, Value>) -> AssemblyRef {
    let mut best = AssemblyRef::default();

    for (key, entry) in block {
        let version: u64 = match key.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                debug!("Skipping non-numeric Ensembl version key '{}'", key);
                continue;
            }
        };

        let entry: EnsemblEntry = match EnsemblEntry::deserialize(entry) {
            Ok(e) => e,
            Err(e) => {
                debug!("Skipping Ensembl version {} without ensembl_id: {}", key, e);
                continue;
            }
        };

        if version >= best.version {
            best = AssemblyRef {
                version,
                ensembl_id: entry.ensembl_id,
            };
        }
    }

    best
}
