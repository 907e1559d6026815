use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use gamescout_core::{GameRecord, NOT_AVAILABLE, has_enrichment};

use crate::error::ExportError;
use crate::{ExportStrategy, export_timestamp, strip_control_chars};

/// Pretty-printed XML document with a metadata block and one `game`
/// element per record.
pub struct XmlExport;

impl XmlExport {
    pub fn new() -> Self {
        Self
    }
}

impl Default for XmlExport {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportStrategy for XmlExport {
    fn name(&self) -> &'static str {
        "XML"
    }

    fn extension(&self) -> &'static str {
        ".xml"
    }

    fn render(&self, games: &[GameRecord]) -> Result<Vec<u8>, ExportError> {
        if games.is_empty() {
            return Err(ExportError::EmptyInput);
        }
        let with_reviews = has_enrichment(games);

        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(ExportError::xml)?;
        start(&mut writer, "games_database")?;

        start(&mut writer, "metadata")?;
        text_element(&mut writer, "export_date", &export_timestamp())?;
        text_element(&mut writer, "total_games", &games.len().to_string())?;
        text_element(&mut writer, "includes_ai_reviews", &with_reviews.to_string())?;
        end(&mut writer, "metadata")?;

        start(&mut writer, "games")?;
        for game in games {
            start(&mut writer, "game")?;
            text_element(&mut writer, "title", &game.title)?;
            text_element(&mut writer, "platforms", &game.platforms_str())?;
            text_element(&mut writer, "release_date", game.release_date_str())?;
            text_element(&mut writer, "genres", &game.genres_str())?;
            if with_reviews {
                text_element(
                    &mut writer,
                    "ai_review",
                    game.review_text().unwrap_or(NOT_AVAILABLE),
                )?;
                text_element(&mut writer, "ai_rating", &game.rating_str())?;
            }
            end(&mut writer, "game")?;
        }
        end(&mut writer, "games")?;

        end(&mut writer, "games_database")?;

        let document = String::from_utf8(writer.into_inner()).map_err(ExportError::xml)?;
        Ok(strip_blank_lines(&document).into_bytes())
    }
}

fn start(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<(), ExportError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(ExportError::xml)
}

fn end(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<(), ExportError> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(ExportError::xml)
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<(), ExportError> {
    writer
        .create_element(name)
        .write_text_content(BytesText::new(&strip_control_chars(text)))
        .map_err(ExportError::xml)?;
    Ok(())
}

fn strip_blank_lines(document: &str) -> String {
    let mut out = String::with_capacity(document.len());
    for line in document.lines().filter(|l| !l.trim().is_empty()) {
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_removed() {
        assert_eq!(strip_blank_lines("<a>\n\n  \n<b/>\n</a>"), "<a>\n<b/>\n</a>\n");
    }

    #[test]
    fn control_characters_never_reach_the_document() {
        let game = GameRecord::new(
            "Bell\u{7}Tower\u{1}",
            vec!["PC\u{0}".to_string()],
            None,
            vec![],
        );
        let bytes = XmlExport::new().render(&[game]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(!text.chars().any(|c| c.is_control() && !matches!(c, '\t' | '\n' | '\r')));
        assert!(text.contains("<title>BellTower</title>"));
    }

    #[test]
    fn declaration_and_root() {
        let game = GameRecord::new("Tetris", vec![], None, vec![]);
        let text = String::from_utf8(XmlExport::new().render(&[game]).unwrap()).unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<games_database>"));
        assert!(text.contains("<includes_ai_reviews>false</includes_ai_reviews>"));
        assert!(!text.contains("<ai_review>"));
        assert!(text.trim_end().ends_with("</games_database>"));
    }
}
