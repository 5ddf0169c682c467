use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::utils::TimeUtils;

/// Sampling interval of a generated series. `Mo1` is the approximate
/// 30-day month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Default)]
pub enum Timeframe {
    M1,
    M5,
    M15,
    M30,
    H1,
    H4,
    #[default]
    D1,
    W1,
    Mo1,
}

impl Timeframe {
    pub fn interval_ms(&self) -> i64 {
        match self {
            Self::M1 => TimeUtils::MS_IN_MIN,
            Self::M5 => TimeUtils::MS_IN_5_MIN,
            Self::M15 => TimeUtils::MS_IN_15_MIN,
            Self::M30 => TimeUtils::MS_IN_30_MIN,
            Self::H1 => TimeUtils::MS_IN_H,
            Self::H4 => TimeUtils::MS_IN_4_H,
            Self::D1 => TimeUtils::MS_IN_D,
            Self::W1 => TimeUtils::MS_IN_W,
            Self::Mo1 => TimeUtils::MS_IN_1_M,
        }
    }

    /// Parses the dashboard shorthand (`1m`, `4h`, `1M`, ...). Unrecognized
    /// text falls back to daily rather than erroring.
    pub fn parse_lossy(text: &str) -> Self {
        match text {
            "1m" => Self::M1,
            "5m" => Self::M5,
            "15m" => Self::M15,
            "30m" => Self::M30,
            "1h" => Self::H1,
            "4h" => Self::H4,
            "1d" => Self::D1,
            "1w" => Self::W1,
            "1M" => Self::Mo1,
            _ => Self::D1,
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::M1 => write!(f, "1m"),
            Self::M5 => write!(f, "5m"),
            Self::M15 => write!(f, "15m"),
            Self::M30 => write!(f, "30m"),
            Self::H1 => write!(f, "1h"),
            Self::H4 => write!(f, "4h"),
            Self::D1 => write!(f, "1d"),
            Self::W1 => write!(f, "1w"),
            Self::Mo1 => write!(f, "1M"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn interval_table_matches_shorthand() {
        assert_eq!(Timeframe::M1.interval_ms(), 60 * 1000);
        assert_eq!(Timeframe::H4.interval_ms(), 4 * 60 * 60 * 1000);
        assert_eq!(Timeframe::D1.interval_ms(), 24 * 60 * 60 * 1000);
        assert_eq!(Timeframe::Mo1.interval_ms(), 30 * 24 * 60 * 60 * 1000);
    }

    #[test]
    fn parse_lossy_round_trips_every_variant() {
        for tf in Timeframe::iter() {
            assert_eq!(Timeframe::parse_lossy(&tf.to_string()), tf);
        }
    }

    #[test]
    fn parse_lossy_falls_back_to_daily() {
        assert_eq!(Timeframe::parse_lossy("2h"), Timeframe::D1);
        assert_eq!(Timeframe::parse_lossy(""), Timeframe::D1);
        // Case matters: the monthly shorthand is capital M, minute is lower.
        assert_eq!(Timeframe::parse_lossy("1D"), Timeframe::D1);
    }
}
