use crate::record::GameRecord;

/// Sentinel that sorts undated records after every real release date.
const UNDATED_SORT_KEY: &str = "9999-12-31";

/// Caller-selected ordering for a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Keep the catalog order (descending upstream rating)
    #[default]
    Upstream,
    /// Oldest first, undated last
    ReleaseDate,
    /// Title A-Z, case-insensitive
    TitleAsc,
    /// Title Z-A, case-insensitive
    TitleDesc,
    /// By the joined platform list
    Platform,
}

const ALL_ORDERS: &[SortOrder] = &[
    SortOrder::Upstream,
    SortOrder::ReleaseDate,
    SortOrder::TitleAsc,
    SortOrder::TitleDesc,
    SortOrder::Platform,
];

impl SortOrder {
    pub fn all() -> &'static [SortOrder] {
        ALL_ORDERS
    }

    /// Name accepted on the command line.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Upstream => "upstream",
            Self::ReleaseDate => "date",
            Self::TitleAsc => "title",
            Self::TitleDesc => "title-desc",
            Self::Platform => "platform",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Upstream => "Catalog order",
            Self::ReleaseDate => "Release date",
            Self::TitleAsc => "Title (A-Z)",
            Self::TitleDesc => "Title (Z-A)",
            Self::Platform => "Platform",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `SortOrder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrderParseError(pub String);

impl std::fmt::Display for SortOrderParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown sort order: '{}'", self.0)
    }
}

impl std::error::Error for SortOrderParseError {}

impl std::str::FromStr for SortOrder {
    type Err = SortOrderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_ORDERS
            .iter()
            .copied()
            .find(|o| o.short_name() == lower || o.display_name().to_lowercase() == lower)
            .ok_or_else(|| SortOrderParseError(s.to_string()))
    }
}

/// Sort in place. All orders are stable.
pub fn sort_records(records: &mut [GameRecord], order: SortOrder) {
    match order {
        SortOrder::Upstream => {}
        SortOrder::ReleaseDate => records.sort_by(|a, b| {
            let a = a.release_date.as_deref().unwrap_or(UNDATED_SORT_KEY);
            let b = b.release_date.as_deref().unwrap_or(UNDATED_SORT_KEY);
            a.cmp(b)
        }),
        SortOrder::TitleAsc => records.sort_by_cached_key(|r| r.title.to_lowercase()),
        SortOrder::TitleDesc => {
            records.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()))
        }
        SortOrder::Platform => records.sort_by_cached_key(GameRecord::platforms_str),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(title: &str, date: Option<&str>, platform: &str) -> GameRecord {
        GameRecord::new(
            title,
            vec![platform.to_string()],
            date.map(str::to_string),
            vec![],
        )
    }

    fn titles(records: &[GameRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    fn fixture() -> Vec<GameRecord> {
        vec![
            game("beta", Some("2023-05-02"), "Xbox"),
            game("Alpha", None, "PC"),
            game("gamma", Some("2023-05-01"), "Nintendo Switch"),
        ]
    }

    #[test]
    fn upstream_keeps_order() {
        let mut records = fixture();
        sort_records(&mut records, SortOrder::Upstream);
        assert_eq!(titles(&records), vec!["beta", "Alpha", "gamma"]);
    }

    #[test]
    fn release_date_puts_undated_last() {
        let mut records = fixture();
        sort_records(&mut records, SortOrder::ReleaseDate);
        assert_eq!(titles(&records), vec!["gamma", "beta", "Alpha"]);
    }

    #[test]
    fn title_sorts_ignore_case() {
        let mut records = fixture();
        sort_records(&mut records, SortOrder::TitleAsc);
        assert_eq!(titles(&records), vec!["Alpha", "beta", "gamma"]);
        sort_records(&mut records, SortOrder::TitleDesc);
        assert_eq!(titles(&records), vec!["gamma", "beta", "Alpha"]);
    }

    #[test]
    fn platform_sort() {
        let mut records = fixture();
        sort_records(&mut records, SortOrder::Platform);
        assert_eq!(titles(&records), vec!["gamma", "Alpha", "beta"]);
    }

    #[test]
    fn parse_names() {
        for &order in SortOrder::all() {
            assert_eq!(order.short_name().parse::<SortOrder>().unwrap(), order);
        }
        assert_eq!("Title (Z-A)".parse::<SortOrder>().unwrap(), SortOrder::TitleDesc);
        assert!("rating".parse::<SortOrder>().is_err());
    }
}
