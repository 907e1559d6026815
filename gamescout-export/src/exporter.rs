use std::path::{Path, PathBuf};

use gamescout_core::GameRecord;

use crate::error::ExportError;
use crate::format::ExportFormat;
use crate::ExportStrategy;

/// Directory exports land in unless configured otherwise.
pub const DEFAULT_OUTPUT_DIR: &str = "games";

/// Appended to a listed format name whose strategy cannot run.
pub const UNAVAILABLE_MARKER: &str = " - unavailable";

/// Picks a strategy by name and writes into a fixed output directory.
pub struct Exporter {
    output_dir: PathBuf,
    strategies: Vec<Box<dyn ExportStrategy>>,
}

impl Exporter {
    /// An exporter with every built-in format registered.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        let mut exporter = Self::empty(output_dir);
        for format in ExportFormat::all() {
            exporter.register(format.strategy());
        }
        exporter
    }

    pub fn empty(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            strategies: Vec::new(),
        }
    }

    /// Add a strategy. Lookups return the first one registered under a name.
    pub fn register(&mut self, strategy: Box<dyn ExportStrategy>) {
        self.strategies.push(strategy);
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Format names in registration order, unavailable ones marked.
    pub fn list_formats(&self) -> Vec<String> {
        self.strategies
            .iter()
            .map(|s| {
                if s.is_available() {
                    s.name().to_string()
                } else {
                    format!("{}{UNAVAILABLE_MARKER}", s.name())
                }
            })
            .collect()
    }

    /// Find the strategy for `format_name`.
    ///
    /// A name carrying an availability suffix (anything from the first
    /// `" -"` on, as [`Exporter::list_formats`] prints it) selects an entry
    /// listed as unavailable and is always refused.
    pub fn resolve(&self, format_name: &str) -> Result<&dyn ExportStrategy, ExportError> {
        let (clean, marked) = match format_name.find(" -") {
            Some(idx) => (format_name[..idx].trim(), true),
            None => (format_name.trim(), false),
        };

        let strategy = self
            .find(clean)
            .or_else(|| {
                clean
                    .parse::<ExportFormat>()
                    .ok()
                    .and_then(|format| self.find(format.label()))
            })
            .ok_or_else(|| ExportError::UnknownFormat(format_name.to_string()))?;

        if marked || !strategy.is_available() {
            return Err(ExportError::Unavailable(strategy.name().to_string()));
        }
        Ok(strategy)
    }

    /// Write `games` as `<output_dir>/<filename><extension>` and return the
    /// absolute path written.
    pub fn export(
        &self,
        games: &[GameRecord],
        format_name: &str,
        filename: &str,
    ) -> Result<PathBuf, ExportError> {
        if games.is_empty() {
            return Err(ExportError::EmptyInput);
        }
        let strategy = self.resolve(format_name)?;

        if !self.output_dir.exists() {
            log::info!("Creating output directory {}", self.output_dir.display());
        }
        std::fs::create_dir_all(&self.output_dir)?;

        let path = self
            .output_dir
            .join(format!("{filename}{}", strategy.extension()));
        strategy.export(games, &path)?;

        let path = std::path::absolute(&path)?;
        log::info!(
            "Exported {} games as {} to {}",
            games.len(),
            strategy.name(),
            path.display()
        );
        Ok(path)
    }

    fn find(&self, name: &str) -> Option<&dyn ExportStrategy> {
        self.strategies
            .iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
            .map(|s| s.as_ref())
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}
