use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InstrumentKind {
    Stock,
    Forex,
    Crypto,
    Index,
    Commodity,
}

/// A tradable instrument as listed in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: String,
    pub name: String,
    pub kind: InstrumentKind,
    pub exchange: Option<String>,
    pub currency: String,
    pub sector: Option<String>,
    pub country: Option<String>,
    pub is_active: bool,
}

impl Instrument {
    /// Case-insensitive match against symbol or display name, the way the
    /// dashboard search box filters the listing.
    pub fn matches(&self, normalized_query: &str) -> bool {
        self.symbol.to_lowercase().contains(normalized_query)
            || self.name.to_lowercase().contains(normalized_query)
    }
}
