use std::fmt;
use std::str::FromStr;

use crate::{DelimitedExport, ExportStrategy, MarkdownExport, SpreadsheetExport, XmlExport};

/// The built-in export formats, in listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Markdown,
    Xlsx,
    Xml,
}

impl ExportFormat {
    pub const fn all() -> &'static [ExportFormat] {
        &[Self::Csv, Self::Markdown, Self::Xlsx, Self::Xml]
    }

    /// Display name, as listed by the exporter.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Markdown => "Markdown",
            Self::Xlsx => "XLSX (Excel)",
            Self::Xml => "XML",
        }
    }

    /// Short names accepted on the command line.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Csv => &["csv"],
            Self::Markdown => &["markdown", "md"],
            Self::Xlsx => &["xlsx", "excel"],
            Self::Xml => &["xml"],
        }
    }

    pub fn strategy(&self) -> Box<dyn ExportStrategy> {
        match self {
            Self::Csv => Box::new(DelimitedExport::new()),
            Self::Markdown => Box::new(MarkdownExport::new()),
            Self::Xlsx => Box::new(SpreadsheetExport::new()),
            Self::Xml => Box::new(XmlExport::new()),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown export format '{0}' (expected one of: csv, markdown, xlsx, xml)")]
pub struct ExportFormatParseError(pub String);

impl FromStr for ExportFormat {
    type Err = ExportFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|format| {
                format.label().eq_ignore_ascii_case(wanted)
                    || format.aliases().iter().any(|a| a.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| ExportFormatParseError(s.to_string()))
    }
}
