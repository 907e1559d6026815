use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use gamescout_core::{GameRecord, ReviewOutcome};
use gamescout_export::{
    DelimitedExport, ExportError, ExportStrategy, MarkdownExport, SpreadsheetExport, XmlExport,
};

fn game(title: &str, platforms: &[&str], released: Option<&str>, genres: &[&str]) -> GameRecord {
    GameRecord::new(
        title,
        platforms.iter().map(|p| p.to_string()).collect(),
        released.map(str::to_string),
        genres.iter().map(|g| g.to_string()).collect(),
    )
}

fn reviewed(mut record: GameRecord, text: &str, rating: i64) -> GameRecord {
    record
        .apply_review(ReviewOutcome::new(Some(text.to_string()), Some(rating)))
        .unwrap();
    record
}

fn sample() -> Vec<GameRecord> {
    vec![
        game(
            "Hollow Knight",
            &["PC", "Nintendo Switch"],
            Some("2017-02-24"),
            &["Action", "Indie"],
        ),
        game("Stardew <Valley> & Co", &["PC"], None, &["RPG"]),
        game("", &[], None, &[]),
    ]
}

fn strategies() -> Vec<Box<dyn ExportStrategy>> {
    vec![
        Box::new(DelimitedExport::new()),
        Box::new(MarkdownExport::new()),
        Box::new(SpreadsheetExport::new()),
        Box::new(XmlExport::new()),
    ]
}

#[test]
fn every_strategy_rejects_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    for strategy in strategies() {
        let path = dir.path().join(format!("empty{}", strategy.extension()));
        let err = strategy.export(&[], &path).unwrap_err();
        assert!(
            matches!(err, ExportError::EmptyInput | ExportError::Unavailable(_)),
            "{}: {err}",
            strategy.name()
        );
        assert!(!path.exists(), "{} wrote a file", strategy.name());
    }
}

#[test]
fn csv_columns_follow_enrichment() {
    let plain = DelimitedExport::new().render(&sample()).unwrap();
    let plain = String::from_utf8(plain).unwrap();
    assert_eq!(plain.lines().count(), 4);
    assert_eq!(
        plain.lines().next(),
        Some("Title,Platforms,Release Date,Genres")
    );
    assert!(plain.contains("Hollow Knight,\"PC, Nintendo Switch\",2017-02-24,\"Action, Indie\""));

    let games = vec![reviewed(sample().remove(0), "Haunting.", 9)];
    let enriched = String::from_utf8(DelimitedExport::new().render(&games).unwrap()).unwrap();
    assert_eq!(
        enriched.lines().next(),
        Some("Title,Platforms,Release Date,Genres,AI Review,AI Rating")
    );
    assert!(enriched.contains("Haunting.,9/10"));
}

#[test]
fn csv_rejects_rows_wider_than_the_first() {
    let games = vec![
        sample().remove(0),
        reviewed(sample().remove(1), "Cozy.", 8),
    ];
    let err = DelimitedExport::new().render(&games).unwrap_err();
    assert!(matches!(err, ExportError::SchemaMismatch { row: 2, .. }));
}

#[test]
fn csv_keeps_review_columns_when_first_review_came_back_empty() {
    let mut refused = sample().remove(0);
    refused.apply_review(ReviewOutcome::empty()).unwrap();
    let games = vec![refused, reviewed(sample().remove(1), "Cozy.", 8)];

    let text = String::from_utf8(DelimitedExport::new().render(&games).unwrap()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[0],
        "Title,Platforms,Release Date,Genres,AI Review,AI Rating"
    );
    assert!(lines[1].ends_with(",N/A,N/A"));
    assert!(lines[2].ends_with("Cozy.,8/10"));
}

#[test]
fn markdown_has_summary_and_table() {
    let text = String::from_utf8(MarkdownExport::new().render(&sample()).unwrap()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "# Games Database Results");
    assert!(text.contains("Exported on: "));
    assert!(text.contains("Total games found: 3"));
    let table_rows = lines.iter().filter(|l| l.starts_with('|')).count();
    assert_eq!(table_rows, 2 + 3);
}

/// Collect (title, platforms, genres, ai_review) for every `game` element.
fn parse_games(xml: &str) -> (Vec<[String; 4]>, String) {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut games = Vec::new();
    let mut current: [String; 4] = Default::default();
    let mut field = None;
    let mut includes_reviews = String::new();

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => {
                field = match e.name().as_ref() {
                    b"game" => {
                        current = Default::default();
                        None
                    }
                    b"title" => Some(0),
                    b"platforms" => Some(1),
                    b"genres" => Some(2),
                    b"ai_review" => Some(3),
                    b"includes_ai_reviews" => Some(4),
                    _ => None,
                };
            }
            Event::Text(e) => {
                let text = e.unescape().unwrap().into_owned();
                match field {
                    Some(4) => includes_reviews = text,
                    Some(i) => current[i] = text,
                    None => {}
                }
            }
            Event::End(e) => {
                if e.name().as_ref() == b"game" {
                    games.push(std::mem::take(&mut current));
                }
                field = None;
            }
            Event::Eof => break,
            _ => {}
        }
    }
    (games, includes_reviews)
}

#[test]
fn xml_round_trip_preserves_text() {
    let source = sample();
    let xml = String::from_utf8(XmlExport::new().render(&source).unwrap()).unwrap();
    assert!(!xml.lines().any(|l| l.trim().is_empty()));

    let (games, includes_reviews) = parse_games(&xml);
    assert_eq!(includes_reviews, "false");
    assert_eq!(games.len(), source.len());
    for (parsed, record) in games.iter().zip(&source) {
        assert_eq!(parsed[0], record.title);
        assert_eq!(parsed[1], record.platforms_str());
        assert_eq!(parsed[2], record.genres_str());
        assert_eq!(parsed[3], "");
    }
}

#[test]
fn xml_marks_unreviewed_records_in_reviewed_collection() {
    let mut source = sample();
    source[0] = reviewed(source[0].clone(), "Haunting.", 9);

    let xml = String::from_utf8(XmlExport::new().render(&source).unwrap()).unwrap();
    let (games, includes_reviews) = parse_games(&xml);

    assert_eq!(includes_reviews, "true");
    assert_eq!(games[0][3], "Haunting.");
    assert_eq!(games[1][3], "N/A");
    assert_eq!(games[2][3], "N/A");
    assert!(xml.contains("<ai_rating>9/10</ai_rating>"));
    assert!(xml.contains("<ai_rating>N/A</ai_rating>"));
}

#[test]
fn xml_with_control_characters_stays_parseable() {
    let source = vec![reviewed(
        game("Glitch\u{1}Quest", &["PC\u{1b}"], None, &["Puzzle"]),
        "Beeps\u{7} a lot.",
        6,
    )];

    let xml = String::from_utf8(XmlExport::new().render(&source).unwrap()).unwrap();
    let (games, includes_reviews) = parse_games(&xml);

    assert_eq!(includes_reviews, "true");
    assert_eq!(games[0][0], "GlitchQuest");
    assert_eq!(games[0][1], "PC");
    assert_eq!(games[0][3], "Beeps a lot.");
}

#[cfg(feature = "xlsx")]
#[test]
fn xlsx_is_a_workbook_with_one_sheet() {
    let bytes = SpreadsheetExport::new().render(&sample()).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

    let mut workbook = String::new();
    archive
        .by_name("xl/workbook.xml")
        .unwrap()
        .read_to_string(&mut workbook)
        .unwrap();
    assert!(workbook.contains(r#"<sheet name="Games Results""#));

    let mut sheet = String::new();
    archive
        .by_name("xl/worksheets/sheet1.xml")
        .unwrap()
        .read_to_string(&mut sheet)
        .unwrap();
    assert_eq!(sheet.matches("<row ").count(), 4);
    assert!(sheet.contains(r#"<c r="A1" t="inlineStr"><is><t xml:space="preserve">Title</t>"#));
    assert!(sheet.contains("Stardew &lt;Valley&gt; &amp; Co"));
    assert!(sheet.contains(r#"<col min="2" max="2" width="21" customWidth="1"/>"#));
}

#[cfg(not(feature = "xlsx"))]
#[test]
fn xlsx_without_feature_is_unavailable() {
    let strategy = SpreadsheetExport::new();
    assert!(!strategy.is_available());
    assert!(matches!(
        strategy.render(&sample()),
        Err(ExportError::Unavailable(_))
    ));
}
