// Domain types and value objects
mod candle;
mod instrument;
mod timeframe;
mod watchlist;

// Re-export commonly used types
pub use candle::{Candle, CandleType};
pub use instrument::{Instrument, InstrumentKind};
pub use timeframe::Timeframe;
pub use watchlist::Watchlist;
