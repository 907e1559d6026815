use gamescout_core::GameRecord;

use crate::error::ExportError;
use crate::table::build_table;
use crate::ExportStrategy;

/// Comma-separated values with a header row.
pub struct DelimitedExport;

impl DelimitedExport {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DelimitedExport {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportStrategy for DelimitedExport {
    fn name(&self) -> &'static str {
        "CSV"
    }

    fn extension(&self) -> &'static str {
        ".csv"
    }

    fn render(&self, games: &[GameRecord]) -> Result<Vec<u8>, ExportError> {
        let table = build_table(games)?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&table.header)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))
    }
}
