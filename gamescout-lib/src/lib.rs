//! Search-enrich-export pipeline for monthly game catalog releases.
//!
//! Ties the catalog fetcher, the review enricher and the exporters together
//! behind [`GamePipeline`], and resolves API keys and settings for callers.

pub mod error;
pub mod pipeline;
pub mod progress;
pub mod settings;

pub use error::{ConfigError, PipelineError};
pub use pipeline::{FALLBACK_FILENAME, GamePipeline};
pub use progress::PipelineProgress;
pub use settings::{ApiKeys, KeySource, Settings, config_path, mask_secret};

pub use gamescout_catalog::{Catalog, CatalogError, CatalogFetcher, RawgClient};
pub use gamescout_core::{GameRecord, PlatformFilter, SortOrder, sort_records};
pub use gamescout_export::{DEFAULT_OUTPUT_DIR, ExportError, ExportFormat, Exporter};
pub use gamescout_review::{DEFAULT_MODEL as DEFAULT_REVIEW_MODEL, LlmReviewer, ReviewService};

/// Pipeline wired to the live catalog and review services.
pub type LivePipeline = GamePipeline<CatalogFetcher<RawgClient>, LlmReviewer>;

impl LivePipeline {
    /// Build the live pipeline from resolved settings.
    ///
    /// Fails when no catalog key is configured. A missing review key only
    /// disables reviews.
    pub fn from_settings(
        settings: &Settings,
        output_dir: Option<std::path::PathBuf>,
    ) -> Result<Self, ConfigError> {
        let keys = settings.api_keys()?;
        let client = RawgClient::new(keys.catalog_key)?;
        let reviewer = LlmReviewer::from_key(
            keys.review_key.as_deref(),
            settings.review_model.as_deref(),
        );
        let output_dir = output_dir
            .or_else(|| settings.output_dir.clone())
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.into());
        Ok(GamePipeline::new(
            CatalogFetcher::new(client),
            reviewer,
            Exporter::new(output_dir),
        ))
    }
}
