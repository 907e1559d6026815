/// Errors from a single review-service call.
///
/// These are logged and swallowed by [`crate::ReviewService::generate`].
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Review service error (HTTP {status}): {message}")]
    Status { status: u16, message: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Review service returned no content")]
    EmptyResponse,
}
