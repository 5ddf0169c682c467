use serde::{Deserialize, Serialize};

use crate::domain::Instrument;

/// Spot snapshot for one instrument, as shown in the quote table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentQuote {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_pct: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub previous_close: f64,
    pub volume: u64,
    pub market_cap: Option<f64>,
    pub timestamp_ms: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentWithQuote {
    #[serde(flatten)]
    pub instrument: Instrument,
    pub quote: InstrumentQuote,
}
