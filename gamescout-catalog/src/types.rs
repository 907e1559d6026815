use gamescout_core::GameRecord;
use serde::Deserialize;
use serde_json::Value;

/// One page of the catalog `games` listing.
#[derive(Debug, Deserialize, Default)]
pub struct GamesPage {
    #[serde(default)]
    pub count: Option<u64>,
    /// URL of the following page, `null` on the last one
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<RawGame>>,
}

impl GamesPage {
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|n| !n.is_empty())
    }

    pub fn into_results(self) -> Vec<RawGame> {
        self.results.unwrap_or_default()
    }
}

/// A game item as the catalog API returns it.
///
/// `platforms` and `genres` are kept as raw JSON so that a missing or
/// oddly-typed field degrades to an empty list instead of failing the page.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RawGame {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub platforms: Value,
    #[serde(default)]
    pub genres: Value,
}

impl RawGame {
    /// Platform names from `[{"platform": {"name": ...}}, ...]`.
    pub fn platform_names(&self) -> Vec<String> {
        list_items(&self.platforms)
            .filter_map(|item| item.get("platform")?.get("name")?.as_str())
            .map(str::to_string)
            .collect()
    }

    /// Genre names from `[{"name": ...}, ...]`.
    pub fn genre_names(&self) -> Vec<String> {
        list_items(&self.genres)
            .filter_map(|item| item.get("name")?.as_str())
            .map(str::to_string)
            .collect()
    }

    pub fn into_record(self) -> GameRecord {
        let platforms = self.platform_names();
        let genres = self.genre_names();
        GameRecord::new(
            self.name.unwrap_or_default(),
            platforms,
            self.released.filter(|d| !d.is_empty()),
            genres,
        )
    }
}

/// Items of a JSON array; anything that is not an array yields nothing.
fn list_items(value: &Value) -> impl Iterator<Item = &Value> {
    value.as_array().into_iter().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawGame {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn full_item_normalizes() {
        let record = raw(json!({
            "name": "Celeste",
            "released": "2018-01-25",
            "platforms": [
                {"platform": {"id": 4, "name": "PC"}},
                {"platform": {"id": 7, "name": "Nintendo Switch"}}
            ],
            "genres": [{"id": 51, "name": "Indie"}, {"id": 83, "name": "Platformer"}]
        }))
        .into_record();

        assert_eq!(record.title, "Celeste");
        assert_eq!(record.platforms, vec!["PC", "Nintendo Switch"]);
        assert_eq!(record.release_date.as_deref(), Some("2018-01-25"));
        assert_eq!(record.genres, vec!["Indie", "Platformer"]);
        assert!(!record.is_enriched());
    }

    #[test]
    fn missing_fields_become_empty() {
        let record = raw(json!({})).into_record();
        assert_eq!(record.title, "");
        assert!(record.platforms.is_empty());
        assert!(record.genres.is_empty());
        assert_eq!(record.release_date, None);
    }

    #[test]
    fn non_list_platforms_become_empty() {
        let record = raw(json!({
            "name": "Odd",
            "platforms": null,
            "genres": {"name": "Action"}
        }))
        .into_record();
        assert!(record.platforms.is_empty());
        assert!(record.genres.is_empty());
    }

    #[test]
    fn malformed_list_entries_are_skipped() {
        let record = raw(json!({
            "name": "Partial",
            "platforms": [{"platform": {"name": "PC"}}, {"platform": null}, 42],
            "genres": [{"name": "RPG"}, {"slug": "no-name"}]
        }))
        .into_record();
        assert_eq!(record.platforms, vec!["PC"]);
        assert_eq!(record.genres, vec!["RPG"]);
    }

    #[test]
    fn duplicate_platforms_are_kept_in_order() {
        let record = raw(json!({
            "name": "Dup",
            "platforms": [{"platform": {"name": "PC"}}, {"platform": {"name": "PC"}}]
        }))
        .into_record();
        assert_eq!(record.platforms, vec!["PC", "PC"]);
    }

    #[test]
    fn page_next_detection() {
        let page: GamesPage =
            serde_json::from_value(json!({"count": 2, "next": null, "results": []})).unwrap();
        assert!(!page.has_next());
        let page: GamesPage = serde_json::from_value(json!({
            "next": "https://api.example/games?page=2",
            "results": null
        }))
        .unwrap();
        assert!(page.has_next());
        assert!(page.into_results().is_empty());
    }
}
