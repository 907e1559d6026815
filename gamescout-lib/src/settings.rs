//! API keys and application settings.
//!
//! Each value is looked up in the environment first, then in the config
//! file at `~/.config/gamescout/config.toml` (platform config dir via
//! `dirs`). The file is optional; a missing catalog key is not.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const CATALOG_KEY_VAR: &str = "RAWG_API_KEY";
pub const REVIEW_KEY_VAR: &str = "OPENAI_API_KEY";
pub const REVIEW_MODEL_VAR: &str = "GAMESCOUT_REVIEW_MODEL";

/// Canonical path to the config file.
pub fn config_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("gamescout").join("config.toml")
}

/// On-disk layout of `config.toml`. Every table and key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub catalog: CatalogSection,
    pub review: ReviewSection,
    pub export: ExportSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    pub api_key: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReviewSection {
    pub api_key: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExportSection {
    pub output_dir: Option<PathBuf>,
}

impl FileConfig {
    /// Read and parse `path`. A file that does not exist is `Ok(None)`.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&contents)
            .map(Some)
            .map_err(|e| ConfigError::invalid(path, e.to_string()))
    }
}

/// Where a setting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Env(&'static str),
    ConfigFile,
    Missing,
}

impl fmt::Display for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env(var) => write!(f, "environment ({var})"),
            Self::ConfigFile => f.write_str("config file"),
            Self::Missing => f.write_str("not set"),
        }
    }
}

/// Credentials the pipeline needs. The catalog key is mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeys {
    pub catalog_key: String,
    pub review_key: Option<String>,
}

/// Everything resolved from the environment and the config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config_path: PathBuf,
    pub catalog_key: Option<String>,
    pub catalog_key_source: KeySource,
    pub review_key: Option<String>,
    pub review_key_source: KeySource,
    pub review_model: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl Settings {
    /// Resolve from the process environment and the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path(), |name| std::env::var(name).ok())
    }

    /// Resolve with an explicit config path and environment lookup.
    pub fn load_from(
        path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let file = FileConfig::load(path)?;
        match &file {
            Some(_) => log::debug!("Loaded config file {}", path.display()),
            None => log::debug!("No config file at {}", path.display()),
        }
        let file = file.unwrap_or_default();

        let from_env = |name: &'static str| non_blank(lookup(name)).map(|v| (v, KeySource::Env(name)));
        let from_file = |value: Option<String>| non_blank(value).map(|v| (v, KeySource::ConfigFile));

        let (catalog_key, catalog_key_source) = split(
            from_env(CATALOG_KEY_VAR).or_else(|| from_file(file.catalog.api_key)),
        );
        let (review_key, review_key_source) = split(
            from_env(REVIEW_KEY_VAR).or_else(|| from_file(file.review.api_key)),
        );
        let review_model = from_env(REVIEW_MODEL_VAR)
            .map(|(v, _)| v)
            .or_else(|| non_blank(file.review.model));

        Ok(Self {
            config_path: path.to_path_buf(),
            catalog_key,
            catalog_key_source,
            review_key,
            review_key_source,
            review_model,
            output_dir: file.export.output_dir,
        })
    }

    /// The keys needed to build a pipeline. Fails when no catalog key is set.
    pub fn api_keys(&self) -> Result<ApiKeys, ConfigError> {
        let catalog_key = self
            .catalog_key
            .clone()
            .ok_or_else(|| ConfigError::MissingCatalogKey(self.config_path.clone()))?;
        Ok(ApiKeys {
            catalog_key,
            review_key: self.review_key.clone(),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn split(found: Option<(String, KeySource)>) -> (Option<String>, KeySource) {
    match found {
        Some((value, source)) => (Some(value), source),
        None => (None, KeySource::Missing),
    }
}

/// Hide all but the last four characters of a secret.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len().max(4));
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{tail}", "*".repeat(chars.len() - 4))
}
