pub mod delimited;
pub mod error;
pub mod exporter;
pub mod format;
pub mod markdown;
pub mod spreadsheet;
pub mod xml_document;

mod table;

pub use delimited::DelimitedExport;
pub use error::ExportError;
pub use exporter::{DEFAULT_OUTPUT_DIR, Exporter, UNAVAILABLE_MARKER};
pub use format::{ExportFormat, ExportFormatParseError};
pub use markdown::MarkdownExport;
pub use spreadsheet::SpreadsheetExport;
pub use xml_document::XmlExport;

use std::path::Path;

use gamescout_core::GameRecord;

/// One output format.
///
/// Strategies are stateless. Availability is fixed when the strategy is
/// built (it depends on which optional components were compiled in), not
/// decided per call.
pub trait ExportStrategy {
    /// Display name, also the lookup key used by the [`Exporter`].
    fn name(&self) -> &'static str;

    /// File extension including the leading dot.
    fn extension(&self) -> &'static str;

    fn is_available(&self) -> bool {
        true
    }

    /// Produce the file contents. Fails on an empty collection.
    fn render(&self, games: &[GameRecord]) -> Result<Vec<u8>, ExportError>;

    /// Render and write to `destination`.
    fn export(&self, games: &[GameRecord], destination: &Path) -> Result<(), ExportError> {
        if !self.is_available() {
            return Err(ExportError::Unavailable(self.name().to_string()));
        }
        let bytes = self.render(games)?;
        std::fs::write(destination, bytes)?;
        Ok(())
    }
}

/// Timestamp stamped into document-style exports.
pub(crate) fn export_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// XML 1.0 cannot carry most C0 control characters.
pub(crate) fn strip_control_chars(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect()
}
