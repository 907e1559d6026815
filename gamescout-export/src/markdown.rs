use std::fmt::Write as _;

use gamescout_core::GameRecord;

use crate::error::ExportError;
use crate::table::build_table;
use crate::{ExportStrategy, export_timestamp};

/// A Markdown document with a summary header and a pipe table.
pub struct MarkdownExport;

impl MarkdownExport {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkdownExport {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportStrategy for MarkdownExport {
    fn name(&self) -> &'static str {
        "Markdown"
    }

    fn extension(&self) -> &'static str {
        ".md"
    }

    fn render(&self, games: &[GameRecord]) -> Result<Vec<u8>, ExportError> {
        let table = build_table(games)?;

        let header: Vec<String> = table.header.iter().map(|h| escape_cell(h)).collect();
        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| escape_cell(cell)).collect())
            .collect();

        let widths: Vec<usize> = (0..header.len())
            .map(|col| {
                rows.iter()
                    .map(|row| row[col].chars().count())
                    .chain(std::iter::once(header[col].chars().count()))
                    .max()
                    .unwrap_or(0)
                    .max(3)
            })
            .collect();

        let mut out = String::new();
        out.push_str("# Games Database Results\n\n");
        let _ = writeln!(out, "Exported on: {}\n", export_timestamp());
        let _ = writeln!(out, "Total games found: {}\n", games.len());

        push_row(&mut out, &header, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_row(&mut out, &rule, &widths);
        for row in &rows {
            push_row(&mut out, row, &widths);
        }

        Ok(out.into_bytes())
    }
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width.saturating_sub(cell.chars().count());
        let _ = write!(out, " {cell}{} |", " ".repeat(pad));
    }
    out.push('\n');
}

/// Pipes would end the cell and newlines the row.
fn escape_cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_pipes_and_newlines() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
        assert_eq!(escape_cell("line one\nline two"), "line one line two");
    }

    #[test]
    fn columns_are_padded_to_the_widest_cell() {
        let games = [
            GameRecord::new("Celeste", vec!["PC".to_string()], None, vec![]),
            GameRecord::new("Ori", vec!["Xbox One".to_string()], None, vec![]),
        ];
        let text = String::from_utf8(MarkdownExport::new().render(&games).unwrap()).unwrap();
        assert!(text.contains("| Title   | Platforms | Release Date | Genres |"));
        assert!(text.contains("| ------- | --------- | ------------ | ------ |"));
        assert!(text.contains("| Ori     | Xbox One  | N/A          |        |"));
    }
}
