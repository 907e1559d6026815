use thiserror::Error;

use gamescout_lib::{ConfigError, PipelineError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Missing or unreadable configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Fetch or export failure
    #[error("{0}")]
    Pipeline(#[from] PipelineError),

    /// Argument combination the parser cannot reject on its own
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
