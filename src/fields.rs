// ==============================================================================
// fields.rs - Field Selection and Row Flattening
// ==============================================================================
// Description: Ordered field selectors shared by the TSV header and rows
// Created: 2026-10-19
// Modified: 2026-10-19
// Version: 1.0.0
// ==============================================================================

use clap::ValueEnum;

use crate::ensembl::{EnsemblXrefs, XREF_COLUMNS};
use crate::models::{render_value, GeneRecord};

/// One output column group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSelector {
    /// Top-level value emitted directly (header is the field name)
    Direct(String),
    /// Values inside a nested object (header is each sub-field name)
    Nested { field: String, sub_fields: Vec<String> },
}

impl FieldSelector {
    pub fn direct(field: &str) -> Self {
        FieldSelector::Direct(field.to_string())
    }

    pub fn nested(field: &str, sub_fields: &[&str]) -> Self {
        FieldSelector::Nested {
            field: field.to_string(),
            sub_fields: sub_fields.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Export variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Gene and panel fields, confidence level and evidence
    Basic,
    /// Basic fields plus inheritance, phenotypes and Ensembl IDs per assembly
    Ensembl,
}

/// Ordered column layout for one export variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    selectors: Vec<FieldSelector>,
    /// Append the four Ensembl cross-reference columns
    cross_references: bool,
    /// Replace literal tabs inside values with ';'
    sanitize_tabs: bool,
}

impl FieldLayout {
    pub fn new(selectors: Vec<FieldSelector>) -> Self {
        Self {
            selectors,
            cross_references: false,
            sanitize_tabs: false,
        }
    }

    pub fn with_cross_references(mut self) -> Self {
        self.cross_references = true;
        self
    }

    pub fn with_tab_sanitizing(mut self) -> Self {
        self.sanitize_tabs = true;
        self
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Basic => Self::basic(),
            Variant::Ensembl => Self::ensembl(),
        }
    }

    /// Columns of the plain gene export
    pub fn basic() -> Self {
        Self::new(vec![
            FieldSelector::nested(
                "gene_data",
                &["hgnc_symbol", "gene_name", "omim_gene", "hgnc_id", "biotype"],
            ),
            FieldSelector::nested("panel", &["id", "name", "disease_group"]),
            FieldSelector::direct("confidence_level"),
            FieldSelector::direct("evidence"),
        ])
    }

    /// Columns of the export with inheritance data and Ensembl IDs
    pub fn ensembl() -> Self {
        Self::new(vec![
            FieldSelector::nested(
                "gene_data",
                &["hgnc_symbol", "gene_name", "omim_gene", "hgnc_id", "biotype"],
            ),
            FieldSelector::nested("panel", &["id", "name", "disease_group", "version"]),
            FieldSelector::direct("confidence_level"),
            FieldSelector::direct("evidence"),
            FieldSelector::direct("mode_of_inheritance"),
            FieldSelector::direct("mode_of_pathogenicity"),
            FieldSelector::direct("phenotypes"),
        ])
        .with_cross_references()
        .with_tab_sanitizing()
    }

    pub fn selectors(&self) -> &[FieldSelector] {
        &self.selectors
    }

    pub fn has_cross_references(&self) -> bool {
        self.cross_references
    }

    /// Header names in the same order `row` produces values
    pub fn header(&self) -> Vec<String> {
        let mut header = Vec::new();
        for selector in &self.selectors {
            match selector {
                FieldSelector::Direct(field) => header.push(field.clone()),
                FieldSelector::Nested { sub_fields, .. } => {
                    header.extend(sub_fields.iter().cloned())
                }
            }
        }
        if self.cross_references {
            header.extend(XREF_COLUMNS.iter().map(|c| c.to_string()));
        }
        header
    }

    /// Flatten one record into row values
    ///
    /// Missing fields render as empty cells, null values as `None`.
    pub fn row(&self, record: &GeneRecord) -> Vec<String> {
        let mut row = Vec::new();
        for selector in &self.selectors {
            match selector {
                FieldSelector::Direct(field) => {
                    row.push(record.get(field).map(render_value).unwrap_or_default());
                }
                FieldSelector::Nested { field, sub_fields } => {
                    for sub_field in sub_fields {
                        row.push(
                            record
                                .get_nested(field, sub_field)
                                .map(render_value)
                                .unwrap_or_default(),
                        );
                    }
                }
            }
        }

        if self.cross_references {
            row.extend(EnsemblXrefs::resolve(record).to_fields());
        }

        if self.sanitize_tabs {
            for value in &mut row {
                if value.contains('\t') {
                    *value = value.replace('\t', ";");
                }
            }
        }

        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(value: Value) -> GeneRecord {
        GeneRecord::new(value.as_object().unwrap().clone())
    }

    fn sample_record() -> GeneRecord {
        record(json!({
            "gene_data": {
                "hgnc_symbol": "BRCA1",
                "gene_name": "BRCA1 DNA repair associated",
                "omim_gene": ["113705"],
                "hgnc_id": "HGNC:1100",
                "biotype": "protein_coding",
                "ensembl_genes": {
                    "GRch37": {"82": {"ensembl_id": "ENSG00000012048"}},
                    "GRch38": {"90": {"ensembl_id": "ENSG00000012048"}}
                }
            },
            "panel": {
                "id": 158,
                "name": "Hereditary breast cancer",
                "disease_group": "Tumour syndromes",
                "version": "2.4"
            },
            "confidence_level": "3",
            "evidence": ["Expert Review Green", "UKGTN"],
            "mode_of_inheritance": "MONOALLELIC, autosomal or pseudoautosomal",
            "mode_of_pathogenicity": "",
            "phenotypes": ["Breast cancer", "Ovarian cancer"]
        }))
    }

    #[test]
    fn test_basic_header_order() {
        assert_eq!(
            FieldLayout::basic().header(),
            vec![
                "hgnc_symbol",
                "gene_name",
                "omim_gene",
                "hgnc_id",
                "biotype",
                "id",
                "name",
                "disease_group",
                "confidence_level",
                "evidence",
            ]
        );
    }

    #[test]
    fn test_basic_row() {
        let row = FieldLayout::basic().row(&sample_record());
        assert_eq!(
            row,
            vec![
                "BRCA1",
                "BRCA1 DNA repair associated",
                "113705",
                "HGNC:1100",
                "protein_coding",
                "158",
                "Hereditary breast cancer",
                "Tumour syndromes",
                "3",
                "Expert Review Green,UKGTN",
            ]
        );
    }

    #[test]
    fn test_header_and_row_lengths_match() {
        for variant in [Variant::Basic, Variant::Ensembl] {
            let layout = FieldLayout::for_variant(variant);
            let row = layout.row(&sample_record());
            assert_eq!(layout.header().len(), row.len(), "variant {:?}", variant);

            let empty = layout.row(&record(json!({})));
            assert_eq!(layout.header().len(), empty.len(), "variant {:?}", variant);
        }
    }

    #[test]
    fn test_cross_reference_columns_add_four() {
        let plain = FieldLayout::new(FieldLayout::ensembl().selectors().to_vec());
        let with_xrefs = FieldLayout::ensembl();
        assert_eq!(with_xrefs.header().len(), plain.header().len() + 4);
        assert_eq!(&with_xrefs.header()[plain.header().len()..], &XREF_COLUMNS);
    }

    #[test]
    fn test_ensembl_row_tail() {
        let row = FieldLayout::ensembl().row(&sample_record());
        assert_eq!(
            &row[row.len() - 4..],
            &["82", "90", "ENSG00000012048", "ENSG00000012048"]
        );
        assert!(row.contains(&"Breast cancer,Ovarian cancer".to_string()));
    }

    #[test]
    fn test_ensembl_replaces_tabs() {
        let r = record(json!({
            "gene_data": {"gene_name": "name\twith\ttabs"},
            "phenotypes": ["a\tb", "c"]
        }));
        let row = FieldLayout::ensembl().row(&r);
        assert_eq!(row[1], "name;with;tabs");
        assert!(row.contains(&"a;b,c".to_string()));
        assert!(row.iter().all(|v| !v.contains('\t')));
    }

    #[test]
    fn test_basic_keeps_tabs() {
        let r = record(json!({"gene_data": {"gene_name": "a\tb"}}));
        assert_eq!(FieldLayout::basic().row(&r)[1], "a\tb");
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let row = FieldLayout::basic().row(&record(json!({"confidence_level": "2"})));
        assert_eq!(row.len(), 10);
        assert_eq!(row[8], "2");
        assert!(row.iter().enumerate().all(|(i, v)| i == 8 || v.is_empty()));
    }

    #[test]
    fn test_null_values_render_as_none() {
        let r = record(json!({
            "gene_data": {
                "hgnc_symbol": "X",
                "gene_name": "Gene X",
                "omim_gene": null,
                "hgnc_id": "HGNC:1",
                "biotype": null
            },
            "panel": {"id": 1, "name": "Panel", "disease_group": null},
            "confidence_level": "3",
            "evidence": []
        }));

        let row = FieldLayout::basic().row(&r);
        assert_eq!(
            row,
            vec!["X", "Gene X", "None", "HGNC:1", "None", "1", "Panel", "None", "3", ""]
        );
    }

    #[test]
    fn test_custom_layout() {
        let layout = FieldLayout::new(vec![
            FieldSelector::direct("entity_name"),
            FieldSelector::nested("panel", &["name"]),
        ]);
        assert_eq!(layout.header(), vec!["entity_name", "name"]);
        let row = layout.row(&record(json!({"entity_name": "TP53", "panel": {"name": "Li-Fraumeni"}})));
        assert_eq!(row, vec!["TP53", "Li-Fraumeni"]);
    }
}
