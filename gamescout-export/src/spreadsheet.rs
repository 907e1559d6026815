//! Excel workbook output.
//!
//! The workbook is written directly as Office Open XML: a zip container
//! holding one worksheet with inline strings. Only compiled in with the
//! `xlsx` feature; without it the strategy reports itself unavailable.

use gamescout_core::GameRecord;

use crate::ExportStrategy;
use crate::error::ExportError;

pub const SHEET_NAME: &str = "Games Results";

/// Upper bound for auto-sized column widths, in characters.
pub const MAX_COLUMN_WIDTH: usize = 50;

pub struct SpreadsheetExport;

impl SpreadsheetExport {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpreadsheetExport {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportStrategy for SpreadsheetExport {
    fn name(&self) -> &'static str {
        "XLSX (Excel)"
    }

    fn extension(&self) -> &'static str {
        ".xlsx"
    }

    fn is_available(&self) -> bool {
        cfg!(feature = "xlsx")
    }

    #[cfg(feature = "xlsx")]
    fn render(&self, games: &[GameRecord]) -> Result<Vec<u8>, ExportError> {
        let table = crate::table::build_table(games)?;
        workbook::write(&table)
    }

    #[cfg(not(feature = "xlsx"))]
    fn render(&self, _games: &[GameRecord]) -> Result<Vec<u8>, ExportError> {
        Err(ExportError::Unavailable(self.name().to_string()))
    }
}

#[cfg(feature = "xlsx")]
mod workbook {
    use std::fmt::Write as _;
    use std::io::{Cursor, Write};

    use quick_xml::escape::escape;
    use zip::write::SimpleFileOptions;
    use zip::{CompressionMethod, ZipWriter};

    use super::{MAX_COLUMN_WIDTH, SHEET_NAME};
    use crate::error::ExportError;
    use crate::strip_control_chars;
    use crate::table::Table;

    const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

    const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

    const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

    pub(super) fn write(table: &Table) -> Result<Vec<u8>, ExportError> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let parts = [
            ("[Content_Types].xml", CONTENT_TYPES.to_string()),
            ("_rels/.rels", ROOT_RELS.to_string()),
            ("xl/workbook.xml", workbook_xml()),
            ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS.to_string()),
            ("xl/worksheets/sheet1.xml", sheet_xml(table)),
        ];
        for (name, body) in parts {
            zip.start_file(name, options)
                .map_err(ExportError::spreadsheet)?;
            zip.write_all(body.as_bytes())?;
        }

        let cursor = zip.finish().map_err(ExportError::spreadsheet)?;
        Ok(cursor.into_inner())
    }

    fn workbook_xml() -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="{}" sheetId="1" r:id="rId1"/></sheets></workbook>"#,
            escape(SHEET_NAME)
        )
    }

    fn sheet_xml(table: &Table) -> String {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        );

        xml.push_str("<cols>");
        for (index, width) in column_widths(table).into_iter().enumerate() {
            let col = index + 1;
            let _ = write!(
                xml,
                r#"<col min="{col}" max="{col}" width="{width}" customWidth="1"/>"#
            );
        }
        xml.push_str("</cols><sheetData>");

        let header = table.header.iter().map(|h| h.to_string()).collect::<Vec<_>>();
        push_row(&mut xml, 1, &header);
        for (index, row) in table.rows.iter().enumerate() {
            push_row(&mut xml, index + 2, row);
        }

        xml.push_str("</sheetData></worksheet>");
        xml
    }

    fn push_row(xml: &mut String, row_number: usize, cells: &[String]) {
        let _ = write!(xml, r#"<row r="{row_number}">"#);
        for (index, value) in cells.iter().enumerate() {
            let reference = format!("{}{row_number}", column_letter(index));
            let value = strip_control_chars(value);
            let _ = write!(
                xml,
                r#"<c r="{reference}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
                escape(value.as_str())
            );
        }
        xml.push_str("</row>");
    }

    /// Longest value per column (header included) plus padding, capped.
    pub(super) fn column_widths(table: &Table) -> Vec<usize> {
        (0..table.header.len())
            .map(|col| {
                let longest = table
                    .rows
                    .iter()
                    .map(|row| row[col].chars().count())
                    .chain(std::iter::once(table.header[col].chars().count()))
                    .max()
                    .unwrap_or(0);
                (longest + 2).min(MAX_COLUMN_WIDTH)
            })
            .collect()
    }

    /// Zero-based column index to spreadsheet letters: 0 is A, 26 is AA.
    pub(super) fn column_letter(index: usize) -> String {
        let mut n = index + 1;
        let mut letters = Vec::new();
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push(b'A' + rem as u8);
            n = (n - 1) / 26;
        }
        letters.reverse();
        String::from_utf8_lossy(&letters).into_owned()
    }

}
