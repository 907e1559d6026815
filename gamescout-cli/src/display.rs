use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamescout_lib::{GameRecord, SortOrder};

/// Print one block per game, numbered in display order.
pub(crate) fn print_results(games: &[GameRecord], order: SortOrder) {
    if games.is_empty() {
        log::info!(
            "{}",
            "No games matched the search.".if_supports_color(Stdout, |t| t.yellow())
        );
        return;
    }

    log::info!(
        "{} {} ({})",
        "Found".if_supports_color(Stdout, |t| t.bold()),
        format!("{} games", games.len()).if_supports_color(Stdout, |t| t.bold()),
        order.display_name().if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!("");

    let width = games.len().to_string().len();
    for (index, game) in games.iter().enumerate() {
        let title = if game.title.is_empty() {
            "(untitled)"
        } else {
            game.title.as_str()
        };
        log::info!(
            "{:>width$}. {}",
            index + 1,
            title.if_supports_color(Stdout, |t| t.bold()),
        );
        log::info!(
            "{:>width$}  Released: {}",
            "",
            game.release_date_str().if_supports_color(Stdout, |t| t.cyan()),
        );
        if !game.platforms.is_empty() {
            log::info!("{:>width$}  Platforms: {}", "", game.platforms_str());
        }
        if !game.genres.is_empty() {
            log::info!(
                "{:>width$}  Genres: {}",
                "",
                game.genres_str().if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        if game.has_review() {
            log::info!(
                "{:>width$}  AI rating: {}",
                "",
                game.rating_str().if_supports_color(Stdout, |t| t.green()),
            );
            log::info!("{:>width$}  {}", "", game.review_str());
        }
    }
    log::info!("");
}
