use rand::Rng;

use crate::config::SymbolTable;
use crate::data::quotes::generate_quote;
use crate::domain::{Instrument, InstrumentKind};
use crate::models::InstrumentWithQuote;

/// The listing shown on the dashboard. Static for the lifetime of the
/// process; quotes are fabricated on demand.
pub struct InstrumentCatalog {
    instruments: Vec<Instrument>,
}

impl Default for InstrumentCatalog {
    fn default() -> Self {
        Self {
            instruments: default_instruments(),
        }
    }
}

impl InstrumentCatalog {
    pub fn new(instruments: Vec<Instrument>) -> Self {
        Self { instruments }
    }

    pub fn all(&self) -> &[Instrument] {
        &self.instruments
    }

    pub fn get(&self, symbol: &str) -> Option<&Instrument> {
        self.instruments.iter().find(|i| i.symbol == symbol)
    }

    /// Case-insensitive search over symbol and name. An empty query
    /// matches nothing, mirroring the dashboard search box.
    pub fn search(&self, query: &str) -> Vec<&Instrument> {
        if query.is_empty() {
            return Vec::new();
        }
        let normalized = query.to_lowercase();
        self.instruments
            .iter()
            .filter(|i| i.matches(&normalized))
            .collect()
    }

    pub fn with_quotes<R: Rng>(&self, table: &SymbolTable, rng: &mut R) -> Vec<InstrumentWithQuote> {
        self.instruments
            .iter()
            .map(|instrument| InstrumentWithQuote {
                instrument: instrument.clone(),
                quote: generate_quote(table, instrument, rng),
            })
            .collect()
    }

    pub fn get_with_quote<R: Rng>(
        &self,
        table: &SymbolTable,
        symbol: &str,
        rng: &mut R,
    ) -> Option<InstrumentWithQuote> {
        let instrument = self.get(symbol)?;
        Some(InstrumentWithQuote {
            instrument: instrument.clone(),
            quote: generate_quote(table, instrument, rng),
        })
    }
}

fn stock(symbol: &str, name: &str, sector: &str) -> Instrument {
    Instrument {
        symbol: symbol.to_string(),
        name: name.to_string(),
        kind: InstrumentKind::Stock,
        exchange: Some("NASDAQ".to_string()),
        currency: "USD".to_string(),
        sector: Some(sector.to_string()),
        country: Some("US".to_string()),
        is_active: true,
    }
}

fn default_instruments() -> Vec<Instrument> {
    vec![
        stock("AAPL", "Apple Inc.", "Technology"),
        stock("MSFT", "Microsoft Corporation", "Technology"),
        stock("GOOGL", "Alphabet Inc.", "Technology"),
        stock("AMZN", "Amazon.com Inc.", "Consumer Cyclical"),
        stock("TSLA", "Tesla Inc.", "Consumer Cyclical"),
        Instrument {
            symbol: "BTC-USD".to_string(),
            name: "Bitcoin USD".to_string(),
            kind: InstrumentKind::Crypto,
            exchange: None,
            currency: "USD".to_string(),
            sector: None,
            country: None,
            is_active: true,
        },
        Instrument {
            symbol: "ETH-USD".to_string(),
            name: "Ethereum USD".to_string(),
            kind: InstrumentKind::Crypto,
            exchange: None,
            currency: "USD".to_string(),
            sector: None,
            country: None,
            is_active: true,
        },
        Instrument {
            symbol: "EUR-USD".to_string(),
            name: "Euro US Dollar".to_string(),
            kind: InstrumentKind::Forex,
            exchange: None,
            currency: "USD".to_string(),
            sector: None,
            country: None,
            is_active: true,
        },
        Instrument {
            symbol: "SPY".to_string(),
            name: "SPDR S&P 500 ETF".to_string(),
            kind: InstrumentKind::Index,
            exchange: Some("NYSE".to_string()),
            currency: "USD".to_string(),
            sector: None,
            country: Some("US".to_string()),
            is_active: true,
        },
        Instrument {
            symbol: "GC=F".to_string(),
            name: "Gold Futures".to_string(),
            kind: InstrumentKind::Commodity,
            exchange: Some("COMEX".to_string()),
            currency: "USD".to_string(),
            sector: None,
            country: None,
            is_active: true,
        },
    ]
}
