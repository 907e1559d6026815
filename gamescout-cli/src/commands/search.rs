use std::path::PathBuf;
use std::rc::Rc;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamescout_lib::{GameRecord, LivePipeline, PlatformFilter, Settings};

use crate::cli_types::QueryArgs;
use crate::display::print_results;
use crate::error::CliError;
use crate::progress::ProgressDisplay;

fn build_pipeline(
    output_dir: Option<PathBuf>,
    quiet: bool,
) -> Result<(LivePipeline, Rc<ProgressDisplay>), CliError> {
    let settings = Settings::load()?;
    let mut pipeline = LivePipeline::from_settings(&settings, output_dir)?;
    let display = ProgressDisplay::new(quiet);
    let observer = Rc::clone(&display);
    pipeline.set_observer(move |event| observer.handle(event));
    Ok((pipeline, display))
}

fn platform_filter(query: &QueryArgs) -> Option<PlatformFilter> {
    query
        .platforms
        .as_ref()
        .map(PlatformFilter::new)
        .filter(|f| !f.is_empty())
}

/// Search one month, print the results and export them if asked.
pub(crate) fn run_search(
    year: i32,
    month: u32,
    query: &QueryArgs,
    output_dir: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    let (mut pipeline, display) = build_pipeline(output_dir, quiet)?;
    let filter = platform_filter(query);

    let result = pipeline.search(year, month, filter.as_ref(), query.reviews);
    display.clear();
    result?;

    finish(&pipeline, query)
}

/// Search a random month in `[min_year, max_year]`.
pub(crate) fn run_random(
    min_year: i32,
    max_year: i32,
    query: &QueryArgs,
    output_dir: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    if min_year > max_year {
        return Err(CliError::invalid_argument(format!(
            "--min-year {min_year} is after --max-year {max_year}"
        )));
    }
    let (mut pipeline, display) = build_pipeline(output_dir, quiet)?;
    let filter = platform_filter(query);

    let result = pipeline.search_random(min_year, max_year, filter.as_ref(), query.reviews);
    display.clear();
    let (_, year, month) = result?;

    log::info!(
        "Random pick: {}",
        format!("{month:02}/{year}").if_supports_color(Stdout, |t| t.bold())
    );
    finish(&pipeline, query)
}

fn finish(pipeline: &LivePipeline, query: &QueryArgs) -> Result<(), CliError> {
    let games: Vec<GameRecord> = pipeline.sorted_results(query.sort);
    print_results(&games, query.sort);

    let Some(format) = &query.format else {
        return Ok(());
    };
    if games.is_empty() {
        log::warn!("Nothing to export");
        return Ok(());
    }

    let path = pipeline.export(&games, format, query.output.as_deref())?;
    log::info!(
        "{} {}",
        "Exported to".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
