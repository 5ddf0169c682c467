// Top Level Constants
pub const DEFAULT_SERIES_LIMIT: i64 = 100;

pub mod generator {
    use crate::config::{DriftPct, VolatilityPct};

    /// Fallback for symbols missing from the base-price table.
    pub const DEFAULT_BASE_PRICE: f64 = 100.0;

    pub const BASELINE_VOLATILITY: VolatilityPct = VolatilityPct::new(0.01);
    pub const CRYPTO_VOLATILITY: VolatilityPct = VolatilityPct::new(0.03);

    /// Intraday close drift away from the open, at most +/- 0.5%.
    pub const CLOSE_JITTER: f64 = 0.005;

    /// Volume base multiplier: volume ~ base_price * 100k, scaled up with
    /// the realized move of the step.
    pub const VOLUME_SCALE: f64 = 100_000.0;
    pub const VOLUME_MOVE_WEIGHT: f64 = 10.0;

    pub const DRIFT_MILD_UP: DriftPct = DriftPct::new(0.0001);
    pub const DRIFT_STRONG_UP: DriftPct = DriftPct::new(0.0002);
    pub const DRIFT_DOWN: DriftPct = DriftPct::new(-0.0001);
}

pub mod sizing {
    /// Caps for the optimized-length bounding function, per timeframe.
    pub const MAX_DAILY_POINTS: i64 = 365;
    pub const MAX_HOURLY_POINTS: i64 = 500;
    pub const MAX_WEEKLY_POINTS: i64 = 200;

    /// Trading hours approximated per day when downsampling hourly data.
    pub const HOURLY_POINTS_PER_DAY: i64 = 8;
}

pub mod quotes {
    /// Spot price wanders +/- 2% around the table base price.
    pub const PRICE_BAND: f64 = 0.02;
    /// Previous close and open wander +/- 1%.
    pub const REFERENCE_BAND: f64 = 0.01;
    /// Day range spans 0.5% to 2.5% of the spot price.
    pub const RANGE_MIN: f64 = 0.005;
    pub const RANGE_SPREAD: f64 = 0.02;

    /// Share count band used to fake a market cap for stock instruments.
    pub const MIN_SHARES_B: f64 = 5.0;
    pub const MAX_SHARES_B: f64 = 10.0;
}
