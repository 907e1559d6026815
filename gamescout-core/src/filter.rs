use crate::record::GameRecord;

/// Platform tokens used to narrow a search.
///
/// A record matches when any of its platform names contains any token as a
/// case-insensitive substring, so `"PlayStation"` keeps `"PlayStation 5"`.
/// An empty filter keeps everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformFilter {
    tokens: Vec<String>,
}

impl PlatformFilter {
    /// Build a filter from tokens. Blank tokens are dropped.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokens
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { tokens }
    }

    /// Parse a comma-separated list such as `"pc, playstation"`.
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn matches(&self, record: &GameRecord) -> bool {
        if self.tokens.is_empty() {
            return true;
        }
        record.platforms.iter().any(|platform| {
            let platform = platform.to_lowercase();
            self.tokens.iter().any(|token| platform.contains(token.as_str()))
        })
    }
}

/// Apply an optional filter; `None` keeps everything.
pub fn matches(record: &GameRecord, filter: Option<&PlatformFilter>) -> bool {
    filter.is_none_or(|f| f.matches(record))
}
