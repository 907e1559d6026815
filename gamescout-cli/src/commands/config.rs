use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamescout_lib::{DEFAULT_OUTPUT_DIR, KeySource, Settings, config_path, mask_secret};

use crate::error::CliError;

/// Show resolved keys and settings with their sources.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let settings = Settings::load()?;

    log::info!(
        "{}",
        "gamescout configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    let path = &settings.config_path;
    let status = if path.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(not found)".if_supports_color(Stdout, |t| t.dimmed()).to_string()
    };
    log::info!(
        "  Config file: {} {status}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!("");

    print_key(
        "catalog api_key",
        settings.catalog_key.as_deref(),
        settings.catalog_key_source,
        true,
    );
    print_key(
        "review api_key",
        settings.review_key.as_deref(),
        settings.review_key_source,
        false,
    );

    let model = settings
        .review_model
        .clone()
        .unwrap_or_else(|| format!("{} (default)", gamescout_lib::DEFAULT_REVIEW_MODEL));
    log::info!("  {:<16} {}", "review model", model);

    let output_dir = settings
        .output_dir
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| format!("{DEFAULT_OUTPUT_DIR} (default)"));
    log::info!("  {:<16} {}", "output_dir", output_dir);

    if settings.catalog_key.is_none() {
        log::info!("");
        log::warn!("A catalog API key is required for searches");
    }
    Ok(())
}

fn print_key(name: &str, value: Option<&str>, source: KeySource, required: bool) {
    let source_str = format!("({source})");
    match value {
        Some(v) => log::info!(
            "  {:<16} {} {}",
            name,
            mask_secret(v),
            source_str.if_supports_color(Stdout, |t| t.dimmed()),
        ),
        None if required => log::info!(
            "  {:<16} {}",
            name,
            "missing".if_supports_color(Stdout, |t| t.red()),
        ),
        None => log::info!(
            "  {:<16} {}",
            name,
            "not set, reviews disabled".if_supports_color(Stdout, |t| t.yellow()),
        ),
    }
}

/// Print the config file path.
pub(crate) fn run_config_path() {
    log::info!("{}", config_path().display());
}
