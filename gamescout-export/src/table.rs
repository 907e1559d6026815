use gamescout_core::GameRecord;

use crate::error::ExportError;

/// Header plus rows, projected from the records' field maps.
#[derive(Debug)]
pub(crate) struct Table {
    pub header: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// Project every record onto the first record's columns.
///
/// A column the first record lacks is an error; a column a later record
/// lacks is left blank.
pub(crate) fn build_table(games: &[GameRecord]) -> Result<Table, ExportError> {
    let first = games.first().ok_or(ExportError::EmptyInput)?;
    let header: Vec<&'static str> = first
        .projected_fields()
        .into_iter()
        .map(|(column, _)| column)
        .collect();

    let mut rows = Vec::with_capacity(games.len());
    for (index, game) in games.iter().enumerate() {
        let fields = game.projected_fields();
        if let Some((column, _)) = fields.iter().find(|(c, _)| !header.contains(c)) {
            return Err(ExportError::SchemaMismatch {
                row: index + 1,
                column: column.to_string(),
            });
        }
        let row = header
            .iter()
            .map(|column| {
                fields
                    .iter()
                    .find(|(c, _)| c == column)
                    .map(|(_, value)| value.clone())
                    .unwrap_or_default()
            })
            .collect();
        rows.push(row);
    }

    Ok(Table { header, rows })
}
