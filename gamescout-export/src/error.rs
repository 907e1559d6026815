/// Errors that can occur while exporting records.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No data to export")]
    EmptyInput,

    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    #[error("Export format {0} is not available")]
    Unavailable(String),

    #[error("Row {row} has column '{column}' that the first row lacks")]
    SchemaMismatch { row: usize, column: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XML writing error: {0}")]
    Xml(String),

    #[error("Spreadsheet writing error: {0}")]
    Spreadsheet(String),
}

impl ExportError {
    pub fn xml(msg: impl std::fmt::Display) -> Self {
        Self::Xml(msg.to_string())
    }

    pub fn spreadsheet(msg: impl std::fmt::Display) -> Self {
        Self::Spreadsheet(msg.to_string())
    }
}
