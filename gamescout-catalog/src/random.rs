use gamescout_core::CoreError;
use rand::Rng;

/// Pick a uniformly random year in `[min_year, max_year]` and month in `[1, 12]`.
pub fn pick_random_period<R: Rng>(
    rng: &mut R,
    min_year: i32,
    max_year: i32,
) -> Result<(i32, u32), CoreError> {
    if min_year > max_year {
        return Err(CoreError::InvalidYearRange {
            min: min_year,
            max: max_year,
        });
    }
    let year = rng.gen_range(min_year..=max_year);
    let month = rng.gen_range(1..=12);
    Ok((year, month))
}
