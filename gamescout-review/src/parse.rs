//! Review-service response parsing.
//!
//! Responses are tried against an ordered list of parsers; the first one that
//! recognizes the payload wins. Structured JSON comes first, then the older
//! line-oriented `REVIEW:` / `RATING:` layout.

use gamescout_core::ReviewOutcome;
use serde_json::Value;

type Parser = fn(&str) -> Option<ReviewOutcome>;

const PARSERS: &[(&str, Parser)] = &[
    ("structured", parse_structured),
    ("marked lines", parse_marked_lines),
];

const REVIEW_MARKERS: &[&str] = &["REVIEW:", "RECENSIONE:"];
const RATING_MARKERS: &[&str] = &["RATING:", "VOTO:"];

/// Parse a raw response. Never fails: unrecognized content gives an empty outcome.
pub fn parse_response(content: &str) -> ReviewOutcome {
    for (name, parser) in PARSERS {
        if let Some(outcome) = parser(content) {
            log::debug!("Review response parsed as {name}");
            return outcome;
        }
    }
    log::debug!("Review response not recognized");
    ReviewOutcome::empty()
}

/// `{"review": "...", "rating": 8}`; the rating may also be a numeric string.
fn parse_structured(content: &str) -> Option<ReviewOutcome> {
    let value: Value = serde_json::from_str(content.trim()).ok()?;
    let object = value.as_object()?;

    let review = match object.get("review")? {
        Value::String(s) => s.trim().to_string(),
        Value::Null => return None,
        other => other.to_string(),
    };
    if review.is_empty() {
        return None;
    }

    let rating = match object.get("rating") {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => Some(s.trim().parse::<i64>().ok()?),
        _ => None,
    };

    Some(ReviewOutcome::new(Some(review), rating))
}

/// Lines prefixed with a review marker and a rating marker, case-insensitive.
fn parse_marked_lines(content: &str) -> Option<ReviewOutcome> {
    let mut review = None;
    let mut rating = None;

    for line in content.lines() {
        let line = line.trim_start();
        if let Some(rest) = strip_marker(line, REVIEW_MARKERS) {
            let text = rest.trim();
            if !text.is_empty() {
                review = Some(text.to_string());
            }
        } else if let Some(rest) = strip_marker(line, RATING_MARKERS) {
            rating = leading_digits(rest);
        }
    }

    review.map(|text| ReviewOutcome::new(Some(text), rating))
}

fn strip_marker<'a>(line: &'a str, markers: &[&str]) -> Option<&'a str> {
    markers.iter().find_map(|marker| {
        let prefix = line.get(..marker.len())?;
        if prefix.eq_ignore_ascii_case(marker) {
            Some(&line[marker.len()..])
        } else {
            None
        }
    })
}

/// First run of digits in `text`, limited to two digits: `" 8/10"` gives 8.
fn leading_digits(text: &str) -> Option<i64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .take(2)
        .collect();
    digits.parse().ok()
}
