//! Value-object newtypes for the generator tables (Immutable Blueprints)

use serde::{Deserialize, Serialize};

/// Per-step fractional price fluctuation magnitude. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct VolatilityPct(f64);

impl VolatilityPct {
    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 { 0.0 } else { val };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for VolatilityPct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}%", self.0 * 100.)
    }
}

/// Constant per-step directional bias. May be negative (downtrend).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct DriftPct(f64);

impl DriftPct {
    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for DriftPct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+.4}%", self.0 * 100.)
    }
}
