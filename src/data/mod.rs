mod catalog;
mod generator;
mod provider;
mod quotes;
mod sizing;
mod watchlists;

pub use {
    catalog::InstrumentCatalog,
    generator::{SeriesGenerator, TrendRegime},
    provider::{MarketDataProvider, MockProvider},
    quotes::generate_quote,
    sizing::optimized_limit,
    watchlists::WatchlistStore,
};
