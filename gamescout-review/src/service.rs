use gamescout_core::{GameRecord, ReviewOutcome};

use crate::client::{ChatBackend, ChatClient};
use crate::parse::parse_response;
use crate::prompt::{SYSTEM_INSTRUCTION, build_prompt};

/// Produces a review and rating for one record.
pub trait ReviewService {
    /// Whether the service can be called at all. Callers skip enrichment
    /// entirely when this is false.
    fn is_available(&self) -> bool;

    /// Exactly one service call per invocation. Failures come back as an
    /// empty outcome, never as an error.
    fn generate(&self, game: &GameRecord) -> ReviewOutcome;
}

/// Review service backed by a chat-style language model.
pub struct LlmReviewer<B = ChatClient> {
    backend: Option<B>,
}

impl LlmReviewer<ChatClient> {
    /// Build from an optional key. A missing key, or a client that fails to
    /// build, leaves the reviewer unavailable.
    pub fn from_key(api_key: Option<&str>, model: Option<&str>) -> Self {
        let Some(key) = api_key.map(str::trim).filter(|k| !k.is_empty()) else {
            log::info!("No review service key configured; reviews are disabled");
            return Self::disabled();
        };

        match ChatClient::new(key) {
            Ok(client) => {
                let client = match model {
                    Some(m) => client.with_model(m),
                    None => client,
                };
                log::info!("Review service ready (model {})", client.model());
                Self::with_backend(client)
            }
            Err(e) => {
                log::error!("Failed to configure review service: {e}");
                Self::disabled()
            }
        }
    }
}

impl<B: ChatBackend> LlmReviewer<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    pub fn disabled() -> Self {
        Self { backend: None }
    }
}

impl<B: ChatBackend> ReviewService for LlmReviewer<B> {
    fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    fn generate(&self, game: &GameRecord) -> ReviewOutcome {
        let Some(backend) = &self.backend else {
            return ReviewOutcome::empty();
        };

        match backend.complete(SYSTEM_INSTRUCTION, &build_prompt(game)) {
            Ok(content) => parse_response(&content),
            Err(e) => {
                log::warn!("Review generation failed for '{}': {e}", game.title);
                ReviewOutcome::empty()
            }
        }
    }
}
