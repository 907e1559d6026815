use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamescout_lib::{DEFAULT_OUTPUT_DIR, ExportFormat, Exporter, Settings};

use crate::error::CliError;

/// List export formats in the order the exporter knows them.
pub(crate) fn run_formats(output_dir: Option<PathBuf>) -> Result<(), CliError> {
    let settings = Settings::load()?;
    let dir = output_dir
        .or(settings.output_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    let exporter = Exporter::new(&dir);

    log::info!("{}", "Export formats:".if_supports_color(Stdout, |t| t.bold()));
    for (name, format) in exporter.list_formats().iter().zip(ExportFormat::all()) {
        let aliases = format.aliases().join(", ");
        if name == format.label() {
            log::info!(
                "  {} {}",
                name.if_supports_color(Stdout, |t| t.green()),
                format!("({aliases})").if_supports_color(Stdout, |t| t.dimmed()),
            );
        } else {
            log::info!("  {}", name.if_supports_color(Stdout, |t| t.red()));
        }
    }
    log::info!("");
    log::info!(
        "Output directory: {}",
        dir.display().if_supports_color(Stdout, |t| t.cyan())
    );
    Ok(())
}
