//! Exporting every table.
//!
//! Every table is attempted in [`OutputTable::ALL`] order. A table either
//! reaches its destination whole or is reported as failed; a failure
//! never stops the remaining tables.

use std::path::PathBuf;

use super::sink::Sink;
use super::tables::{encode, records, OutputTable};
use crate::core::DataError;
use crate::entities::Catalog;
use crate::render::GlyphTable;

/// Outcome of an export run.
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Tables written, with their destinations.
    pub written: Vec<(OutputTable, PathBuf)>,
    /// One error per table that could not be written.
    pub failed: Vec<DataError>,
}

impl ExportReport {
    /// True when every table was written.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of tables attempted.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.written.len() + self.failed.len()
    }
}

fn export_table(
    catalog: &Catalog,
    table: OutputTable,
    glyphs: &GlyphTable,
    sink: &mut impl Sink,
) -> Result<PathBuf, DataError> {
    let config = catalog.config();
    let records = records(catalog, table, glyphs)?;
    let text = encode(table, &records, config.pretty)?;

    let path = config.destination(table.file_name());
    sink.persist(&path, &text).map_err(|source| DataError::Write {
        table,
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Encode and persist every table, logging each outcome.
pub fn export(catalog: &Catalog, glyphs: &GlyphTable, sink: &mut impl Sink) -> ExportReport {
    let mut report = ExportReport::default();

    for table in OutputTable::ALL {
        match export_table(catalog, table, glyphs, sink) {
            Ok(path) => {
                tracing::info!(%table, path = %path.display(), "created data file");
                report.written.push((table, path));
            }
            Err(err) => {
                tracing::error!(%table, error = %err, "failed to write data file");
                report.failed.push(err);
            }
        }
    }

    report
}
