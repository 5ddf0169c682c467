use crate::config::constants::{sizing, DEFAULT_SERIES_LIMIT};
use crate::domain::Timeframe;

/// Maps a requested day span onto a bounded point count for the given
/// timeframe, so long-range chart views stay drawable. Pure bounding,
/// no randomness.
pub fn optimized_limit(timeframe: Timeframe, days: i64) -> i64 {
    let days = days.max(0);
    match timeframe {
        Timeframe::D1 => days.min(sizing::MAX_DAILY_POINTS),
        Timeframe::H1 => (days * sizing::HOURLY_POINTS_PER_DAY).min(sizing::MAX_HOURLY_POINTS),
        Timeframe::W1 => days.min(sizing::MAX_WEEKLY_POINTS),
        _ => DEFAULT_SERIES_LIMIT,
    }
}
