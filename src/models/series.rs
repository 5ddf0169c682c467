use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::{Candle, Timeframe};
use crate::utils::mean_and_stddev;

/// One generated historical series, echoing the request parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSeries {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub data: Vec<Candle>,
}

impl MarketSeries {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Fractional close-to-close changes between consecutive candles.
    pub fn step_change_pcts(&self) -> Vec<f64> {
        self.data
            .iter()
            .tuple_windows()
            .filter(|(prev, _)| prev.close != 0.0)
            .map(|(prev, next)| (next.close - prev.close) / prev.close)
            .collect()
    }

    /// Average magnitude of the step-to-step change. The crypto class
    /// should score visibly higher here than forex.
    pub fn mean_abs_step_change(&self) -> f64 {
        let changes: Vec<f64> = self.step_change_pcts().iter().map(|c| c.abs()).collect();
        let (mean, _) = mean_and_stddev(&changes);
        mean
    }
}
