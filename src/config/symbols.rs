use std::collections::HashMap;

use crate::config::constants::generator;
use crate::config::VolatilityPct;

pub struct BasePriceEntry {
    pub symbol: &'static str,
    pub price: f64,
}

/// Anchor prices for the known demo symbols. Anything else falls back to
/// [`generator::DEFAULT_BASE_PRICE`].
pub const DEFAULT_BASE_PRICES: &[BasePriceEntry] = &[
    BasePriceEntry { symbol: "AAPL", price: 180.0 },
    BasePriceEntry { symbol: "MSFT", price: 350.0 },
    BasePriceEntry { symbol: "GOOGL", price: 140.0 },
    BasePriceEntry { symbol: "AMZN", price: 170.0 },
    BasePriceEntry { symbol: "TSLA", price: 180.0 },
    BasePriceEntry { symbol: "BTC-USD", price: 53_000.0 },
    BasePriceEntry { symbol: "ETH-USD", price: 2_800.0 },
    BasePriceEntry { symbol: "EUR-USD", price: 1.08 },
    BasePriceEntry { symbol: "SPY", price: 470.0 },
    BasePriceEntry { symbol: "GC=F", price: 1_970.0 },
];

/// Substrings that mark a symbol as crypto-class (higher volatility).
pub const CRYPTO_MARKERS: &[&str] = &["BTC", "ETH"];

pub struct VolatilityOverride {
    pub symbol: &'static str,
    pub volatility: VolatilityPct,
}

/// Per-symbol volatility exceptions for notoriously jumpy equities.
pub const DEFAULT_VOLATILITY_OVERRIDES: &[VolatilityOverride] = &[VolatilityOverride {
    symbol: "TSLA",
    volatility: VolatilityPct::new(0.025),
}];

/// Injectable lookup tables driving the series generator: symbol -> base
/// price and symbol-class -> volatility. Tests swap in their own tables
/// for deterministic anchoring.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    base_prices: HashMap<String, f64>,
    default_base_price: f64,
    crypto_markers: Vec<String>,
    crypto_volatility: VolatilityPct,
    volatility_overrides: HashMap<String, VolatilityPct>,
    baseline_volatility: VolatilityPct,
}

impl Default for SymbolTable {
    fn default() -> Self {
        let base_prices = DEFAULT_BASE_PRICES
            .iter()
            .map(|e| (e.symbol.to_string(), e.price))
            .collect();
        let volatility_overrides = DEFAULT_VOLATILITY_OVERRIDES
            .iter()
            .map(|o| (o.symbol.to_string(), o.volatility))
            .collect();

        Self {
            base_prices,
            default_base_price: generator::DEFAULT_BASE_PRICE,
            crypto_markers: CRYPTO_MARKERS.iter().map(|m| m.to_string()).collect(),
            crypto_volatility: generator::CRYPTO_VOLATILITY,
            volatility_overrides,
            baseline_volatility: generator::BASELINE_VOLATILITY,
        }
    }
}

impl SymbolTable {
    /// An empty table: every symbol resolves to the defaults. Useful as a
    /// neutral starting point for injected test tables.
    pub fn empty() -> Self {
        Self {
            base_prices: HashMap::new(),
            default_base_price: generator::DEFAULT_BASE_PRICE,
            crypto_markers: Vec::new(),
            crypto_volatility: generator::CRYPTO_VOLATILITY,
            volatility_overrides: HashMap::new(),
            baseline_volatility: generator::BASELINE_VOLATILITY,
        }
    }

    pub fn with_base_price(mut self, symbol: &str, price: f64) -> Self {
        self.base_prices.insert(symbol.to_string(), price);
        self
    }

    pub fn with_volatility_override(mut self, symbol: &str, volatility: VolatilityPct) -> Self {
        self.volatility_overrides
            .insert(symbol.to_string(), volatility);
        self
    }

    pub fn base_price(&self, symbol: &str) -> f64 {
        self.base_prices
            .get(symbol)
            .copied()
            .unwrap_or(self.default_base_price)
    }

    /// Class resolution order: crypto markers beat per-symbol overrides,
    /// which beat the baseline.
    pub fn volatility(&self, symbol: &str) -> VolatilityPct {
        if self.crypto_markers.iter().any(|m| symbol.contains(m.as_str())) {
            return self.crypto_volatility;
        }
        if let Some(v) = self.volatility_overrides.get(symbol) {
            return *v;
        }
        self.baseline_volatility
    }
}
