use gamescout_core::GameRecord;

/// Instruction sent as the system message of every review request.
pub const SYSTEM_INSTRUCTION: &str = "You are an experienced, demanding video game critic. \
Answer with a JSON object that has exactly two keys: \"review\" (string) and \
\"rating\" (integer from 1 to 10). No markdown, no extra text.";

/// User prompt describing one record.
pub fn build_prompt(game: &GameRecord) -> String {
    format!(
        "Write a mini review of the video game \"{title}\".\n\
         - Genres: {genres}\n\
         - Platforms: {platforms}\n\
         - Release date: {date}\n\n\
         The review must be:\n\
         - At most 2-3 sentences (about 50-80 words)\n\
         - Professional but accessible\n\
         - Focused on the strengths of its genre and gameplay\n\
         - Followed by a rating from 1 to 10\n",
        title = game.title,
        genres = game.genres_str(),
        platforms = game.platforms_str(),
        date = game.release_date_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_describes_the_record() {
        let game = GameRecord::new(
            "Outer Wilds",
            vec!["PC".to_string(), "Xbox One".to_string()],
            Some("2019-05-28".to_string()),
            vec!["Adventure".to_string()],
        );
        let prompt = build_prompt(&game);
        assert!(prompt.contains("\"Outer Wilds\""));
        assert!(prompt.contains("- Genres: Adventure\n"));
        assert!(prompt.contains("- Platforms: PC, Xbox One\n"));
        assert!(prompt.contains("- Release date: 2019-05-28\n"));
    }

    #[test]
    fn undated_record_says_not_available() {
        let game = GameRecord::new("TBA", vec![], None, vec![]);
        assert!(build_prompt(&game).contains("- Release date: N/A\n"));
    }
}
