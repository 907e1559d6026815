use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Placeholder rendered for missing values in exports.
pub const NOT_AVAILABLE: &str = "N/A";

pub const COLUMN_TITLE: &str = "Title";
pub const COLUMN_PLATFORMS: &str = "Platforms";
pub const COLUMN_RELEASE_DATE: &str = "Release Date";
pub const COLUMN_GENRES: &str = "Genres";
pub const COLUMN_REVIEW: &str = "AI Review";
pub const COLUMN_RATING: &str = "AI Rating";

/// A review score on the 1-10 scale.
///
/// Out-of-range values are rejected rather than clamped: a parsed 15 is
/// not a 10, it is no rating at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Returns `None` when `value` falls outside 1..=10.
    pub fn new(value: i64) -> Option<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("rating {value} outside 1-10"))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

/// Result of one enrichment call: review text and rating, either of which
/// may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewOutcome {
    pub review_text: Option<String>,
    pub rating: Option<Rating>,
}

impl ReviewOutcome {
    /// Build an outcome from a raw parsed rating, discarding it if out of range.
    pub fn new(review_text: Option<String>, raw_rating: Option<i64>) -> Self {
        Self {
            review_text,
            rating: raw_rating.and_then(Rating::new),
        }
    }

    /// The `(None, None)` outcome used when a call fails.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.review_text.is_none() && self.rating.is_none()
    }
}

/// A normalized catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredRecord")]
pub struct GameRecord {
    /// May be empty when upstream sent no name, but never absent
    pub title: String,
    /// Upstream order, duplicates kept
    pub platforms: Vec<String>,
    /// `YYYY-MM-DD` when known
    pub release_date: Option<String>,
    pub genres: Vec<String>,
    review_text: Option<String>,
    rating: Option<Rating>,
    review_applied: bool,
}

/// Serialized shape of a [`GameRecord`].
///
/// Older payloads carry no `review_applied` flag, so a stored review text or
/// rating also counts as a completed enrichment step.
#[derive(Deserialize)]
struct StoredRecord {
    title: String,
    #[serde(default)]
    platforms: Vec<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    genres: Vec<String>,
    #[serde(default)]
    review_text: Option<String>,
    #[serde(default)]
    rating: Option<Rating>,
    #[serde(default)]
    review_applied: bool,
}

impl From<StoredRecord> for GameRecord {
    fn from(stored: StoredRecord) -> Self {
        let review_applied =
            stored.review_applied || stored.review_text.is_some() || stored.rating.is_some();
        Self {
            title: stored.title,
            platforms: stored.platforms,
            release_date: stored.release_date,
            genres: stored.genres,
            rating: stored.review_text.as_ref().and(stored.rating),
            review_text: stored.review_text,
            review_applied,
        }
    }
}

impl GameRecord {
    pub fn new(
        title: impl Into<String>,
        platforms: Vec<String>,
        release_date: Option<String>,
        genres: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            platforms,
            release_date,
            genres,
            review_text: None,
            rating: None,
            review_applied: false,
        }
    }

    pub fn review_text(&self) -> Option<&str> {
        self.review_text.as_deref()
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// True once the enrichment step has run for this record, whatever it
    /// produced.
    pub fn is_enriched(&self) -> bool {
        self.review_applied
    }

    /// True when a review text is present.
    pub fn has_review(&self) -> bool {
        self.review_text.is_some()
    }

    /// Record the outcome of the enrichment step.
    ///
    /// Can only happen once per record, even when the outcome is empty. A
    /// rating without review text is dropped.
    pub fn apply_review(&mut self, outcome: ReviewOutcome) -> Result<(), CoreError> {
        if self.review_applied {
            return Err(CoreError::AlreadyEnriched(self.title.clone()));
        }
        self.review_applied = true;
        self.rating = outcome.review_text.as_ref().and(outcome.rating);
        self.review_text = outcome.review_text;
        Ok(())
    }

    pub fn platforms_str(&self) -> String {
        self.platforms.join(", ")
    }

    pub fn genres_str(&self) -> String {
        self.genres.join(", ")
    }

    pub fn release_date_str(&self) -> &str {
        self.release_date.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn rating_str(&self) -> String {
        self.rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn review_str(&self) -> &str {
        match self.review_text.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => NOT_AVAILABLE,
        }
    }

    /// Ordered column/value pairs used by the tabular export formats.
    ///
    /// The review columns are present once the enrichment step has run, with
    /// placeholders when it produced nothing.
    pub fn projected_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            (COLUMN_TITLE, self.title.clone()),
            (COLUMN_PLATFORMS, self.platforms_str()),
            (COLUMN_RELEASE_DATE, self.release_date_str().to_string()),
            (COLUMN_GENRES, self.genres_str()),
        ];
        if self.is_enriched() {
            fields.push((COLUMN_REVIEW, self.review_str().to_string()));
            fields.push((COLUMN_RATING, self.rating_str()));
        }
        fields
    }
}

/// Whether the enrichment step ran for any record in the collection.
pub fn has_enrichment(records: &[GameRecord]) -> bool {
    records.iter().any(GameRecord::is_enriched)
}
