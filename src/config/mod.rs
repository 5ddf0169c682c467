//! Configuration module for the mock market-data crate.

// Can all be private now because we have a public re-export.
mod symbols;
mod types;

// Public
pub mod constants;

// Re-export commonly used items
pub use symbols::{
    BasePriceEntry, SymbolTable, VolatilityOverride, CRYPTO_MARKERS, DEFAULT_BASE_PRICES,
    DEFAULT_VOLATILITY_OVERRIDES,
};
pub use types::{DriftPct, VolatilityPct};
