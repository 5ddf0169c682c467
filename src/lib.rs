// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod models;
pub mod utils;

// Re-export commonly used types outside of crate
pub use config::SymbolTable;
pub use data::{
    optimized_limit, InstrumentCatalog, MarketDataProvider, MockProvider, SeriesGenerator,
    WatchlistStore,
};
pub use domain::{Candle, Timeframe};
pub use error::MarketError;
pub use models::{MarketSeries, SeriesRequest};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Instrument symbol to generate data for
    #[arg(long, default_value = "BTC-USD")]
    pub symbol: String,

    /// Timeframe shorthand (1m, 5m, 15m, 30m, 1h, 4h, 1d, 1w, 1M);
    /// anything else falls back to daily
    #[arg(long, default_value = "1d")]
    pub timeframe: String,

    /// Number of candles to generate
    #[arg(long)]
    pub limit: Option<i64>,

    /// Bound the series by a day span instead of an explicit limit
    #[arg(long, conflicts_with = "limit")]
    pub days: Option<i64>,

    /// Seed the random walk for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Print the instrument catalog with quotes and exit
    #[arg(long, default_value_t = false)]
    pub quotes: bool,
}
