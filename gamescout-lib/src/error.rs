use std::path::PathBuf;

use gamescout_catalog::CatalogError;
use gamescout_core::CoreError;
use gamescout_export::ExportError;

/// Errors raised while loading keys and settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "No catalog API key configured. Set RAWG_API_KEY or add [catalog] api_key to {}",
        .0.display()
    )]
    MissingCatalogKey(PathBuf),

    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {message}", .path.display())]
    Invalid { path: PathBuf, message: String },

    #[error("Failed to set up catalog client: {0}")]
    CatalogClient(#[from] CatalogError),
}

impl ConfigError {
    pub fn invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Invalid {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Errors surfaced by the pipeline. Lower-layer errors pass through as-is.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Core(#[from] CoreError),
}
