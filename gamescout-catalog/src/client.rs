use std::time::Duration;

use gamescout_core::DateWindow;

use crate::error::CatalogError;
use crate::fetch::PageSource;
use crate::types::GamesPage;

const BASE_URL: &str = "https://api.rawg.io/api/games";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Ordering sent with every page request: best rated first.
const ORDERING: &str = "-rating";

/// Blocking HTTP client for the RAWG games catalog.
pub struct RawgClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
}

impl RawgClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, CatalogError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the client at a different endpoint (mirrors, local test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn query_params(&self, window: &DateWindow, page: u32, page_size: u32) -> Vec<(&'static str, String)> {
        vec![
            ("dates", window.query_value()),
            ("page_size", page_size.to_string()),
            ("page", page.to_string()),
            ("ordering", ORDERING.to_string()),
            ("key", self.api_key.clone()),
        ]
    }
}

impl PageSource for RawgClient {
    fn fetch_page(
        &self,
        window: &DateWindow,
        page: u32,
        page_size: u32,
    ) -> Result<GamesPage, CatalogError> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&self.query_params(window, page, page_size))
            .send()?;

        let status = resp.status();
        let text = resp.text()?;

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(CatalogError::InvalidKey(snippet(&text)));
        }
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                message: snippet(&text),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// First 200 characters of a response body, for error messages.
fn snippet(text: &str) -> String {
    text.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_carries_window_paging_ordering_and_key() {
        let client = RawgClient::new("secret").unwrap();
        let window = DateWindow::for_month(2023, 12).unwrap();
        let params = client.query_params(&window, 3, 40);
        assert_eq!(
            params,
            vec![
                ("dates", "2023-12-01,2024-01-01".to_string()),
                ("page_size", "40".to_string()),
                ("page", "3".to_string()),
                ("ordering", "-rating".to_string()),
                ("key", "secret".to_string()),
            ]
        );
    }

    #[test]
    fn snippet_truncates_on_char_boundary() {
        let long = "é".repeat(300);
        assert_eq!(snippet(&long).chars().count(), 200);
        assert_eq!(snippet("short"), "short");
    }
}
