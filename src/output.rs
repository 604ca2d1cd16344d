// ==============================================================================
// output.rs - TSV Output
// ==============================================================================
// Description: Tab-separated writer for flattened gene records
// Created: 2026-10-19
// Modified: 2026-10-19
// Version: 1.0.0
// ==============================================================================

use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{Result, ScraperError};
use crate::fields::FieldLayout;
use crate::models::GeneRecord;

/// Writes a header line and one raw (unquoted) tab-separated line per record
pub struct TsvWriter<W: Write> {
    writer: Writer<W>,
    layout: FieldLayout,
}

impl<W: Write> TsvWriter<W> {
    pub fn new(inner: W, layout: FieldLayout) -> Self {
        let writer = WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(inner);

        Self { writer, layout }
    }

    /// Write the column names and flush
    pub fn write_header(&mut self) -> Result<()> {
        self.writer.write_record(self.layout.header())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write one line per record and flush
    ///
    /// # Returns
    /// * Number of records written
    pub fn write_records(&mut self, records: &[GeneRecord]) -> Result<usize> {
        for record in records {
            self.writer.write_record(self.layout.row(record))?;
        }
        self.writer.flush()?;
        Ok(records.len())
    }

    /// Flush and hand back the underlying sink
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| ScraperError::Io(e.into_error()))
    }
}

impl TsvWriter<Box<dyn Write>> {
    /// Writer on stdout, or on a newly created file when `path` is given
    pub fn open(path: Option<&Path>, layout: FieldLayout) -> Result<Self> {
        let sink: Box<dyn Write> = match path {
            Some(path) => Box::new(io::BufWriter::new(File::create(path)?)),
            None => Box::new(io::stdout().lock()),
        };
        Ok(Self::new(sink, layout))
    }
}
