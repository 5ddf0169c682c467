use rand::Rng;

use crate::config::constants::generator::{
    CLOSE_JITTER, DRIFT_DOWN, DRIFT_MILD_UP, DRIFT_STRONG_UP, VOLUME_MOVE_WEIGHT, VOLUME_SCALE,
};
use crate::config::{DriftPct, SymbolTable};
use crate::domain::Candle;
use crate::error::MarketError;
use crate::models::{MarketSeries, SeriesRequest};
use crate::utils::{now_timestamp_ms, round_2dp};

/// Directional regime held for the whole series. Picked once per request
/// from a single uniform draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendRegime {
    MildUp,
    StrongUp,
    Down,
}

impl TrendRegime {
    pub fn drift(self) -> DriftPct {
        match self {
            Self::MildUp => DRIFT_MILD_UP,
            Self::StrongUp => DRIFT_STRONG_UP,
            Self::Down => DRIFT_DOWN,
        }
    }

    // Bucket split keeps the original odds: 0.4 mild-up, 0.3 strong-up,
    // 0.3 down.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let u: f64 = rng.gen_range(0.0..1.0);
        if u > 0.6 {
            Self::MildUp
        } else if u > 0.3 {
            Self::StrongUp
        } else {
            Self::Down
        }
    }
}

/// Fabricates historical OHLCV series via a drifted random walk. Pure per
/// call: all state lives in the injected tables and the caller's RNG, so
/// concurrent use needs no coordination.
pub struct SeriesGenerator {
    symbols: SymbolTable,
}

impl Default for SeriesGenerator {
    fn default() -> Self {
        Self::new(SymbolTable::default())
    }
}

impl SeriesGenerator {
    pub fn new(symbols: SymbolTable) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Generates with a throwaway thread RNG; every call walks an
    /// independent random sequence.
    pub fn generate(&self, req: &SeriesRequest) -> Result<MarketSeries, MarketError> {
        self.generate_with(req, &mut rand::thread_rng())
    }

    /// Seedable entry point: the series is a pure function of the tables,
    /// the request and the RNG stream.
    pub fn generate_with<R: Rng>(
        &self,
        req: &SeriesRequest,
        rng: &mut R,
    ) -> Result<MarketSeries, MarketError> {
        let limit = req.validated_limit()?;

        let interval_ms = req.timeframe.interval_ms();
        let base_price = self.symbols.base_price(&req.symbol);
        let volatility = self.symbols.volatility(&req.symbol).value();
        let trend = TrendRegime::sample(rng).drift().value();

        let end_time = now_timestamp_ms();
        let mut current_price = base_price;
        let mut data = Vec::with_capacity(limit);

        for i in 0..limit {
            let timestamp_ms = end_time - (limit - i) as i64 * interval_ms;

            // Per-step move: uniform noise scaled by class volatility plus
            // the constant regime drift.
            let change_pct = rng.gen_range(-1.0..1.0) * volatility + trend;
            current_price *= 1.0 + change_pct;

            // Wick extension magnitude, on the absolute price scale.
            let step_volatility = volatility * current_price;
            let open = current_price;
            let close = current_price * (1.0 + rng.gen_range(-CLOSE_JITTER..CLOSE_JITTER));
            let high = open.max(close) + rng.gen_range(0.0..1.0) * step_volatility;
            let low = open.min(close) - rng.gen_range(0.0..1.0) * step_volatility;

            // Volume spikes with the size of the realized move.
            let volume = (base_price
                * VOLUME_SCALE
                * (1.0 + rng.gen_range(0.0..1.0) + change_pct.abs() * VOLUME_MOVE_WEIGHT))
                .round() as u64;

            data.push(Candle::new(
                timestamp_ms,
                round_2dp(open),
                round_2dp(high),
                round_2dp(low),
                round_2dp(close),
                volume,
            ));

            // Next step walks from the realized close, unrounded.
            current_price = close;
        }

        log::debug!(
            "generated {} {} candles for {} (base {base_price})",
            data.len(),
            req.timeframe,
            req.symbol
        );

        Ok(MarketSeries {
            symbol: req.symbol.clone(),
            timeframe: req.timeframe,
            data,
        })
    }
}
