use std::io::Write;

use log::LevelFilter;

/// Library crates whose routine progress lines the CLI renders itself.
const LIBRARY_CRATES: &[&str] = &[
    "gamescout_lib",
    "gamescout_catalog",
    "gamescout_review",
    "gamescout_export",
];

/// Install the global logger.
///
/// Normal runs print bare messages to stdout; `--verbose` adds timestamps,
/// levels and debug output from every crate. `RUST_LOG`, when set, replaces
/// the level selection entirely.
pub(crate) fn init(quiet: bool, verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.target(env_logger::Target::Stdout);

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    } else if verbose {
        builder.filter_level(LevelFilter::Debug);
    } else if quiet {
        builder.filter_level(LevelFilter::Warn);
    } else {
        builder.filter_level(LevelFilter::Info);
        for name in LIBRARY_CRATES {
            builder.filter_module(name, LevelFilter::Warn);
        }
    }

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                buf.timestamp_seconds(),
                record.level(),
                record.target(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| match record.level() {
            log::Level::Error => writeln!(buf, "error: {}", record.args()),
            log::Level::Warn => writeln!(buf, "warning: {}", record.args()),
            _ => writeln!(buf, "{}", record.args()),
        });
    }

    builder.init();
}
