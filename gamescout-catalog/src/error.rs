use gamescout_core::CoreError;

/// Errors that can occur while fetching from the catalog API.
///
/// Any of these aborts the whole fetch; pages already received are dropped.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog API rejected the key: {0}")]
    InvalidKey(String),

    #[error("Server error (HTTP {status}): {message}")]
    Status { status: u16, message: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid search window: {0}")]
    Window(#[from] CoreError),
}
