use rand::Rng;

use crate::config::constants::generator::VOLUME_SCALE;
use crate::config::constants::quotes;
use crate::config::SymbolTable;
use crate::domain::{Instrument, InstrumentKind};
use crate::models::InstrumentQuote;
use crate::utils::{now_timestamp_ms, round_2dp};

/// Fabricates a spot quote for one instrument: price wanders a small band
/// around the table base, the day range brackets it, change figures are
/// derived from a fabricated previous close.
pub fn generate_quote<R: Rng>(
    table: &SymbolTable,
    instrument: &Instrument,
    rng: &mut R,
) -> InstrumentQuote {
    let base_price = table.base_price(&instrument.symbol);

    let price = base_price * (1.0 + rng.gen_range(-1.0..1.0) * quotes::PRICE_BAND);
    let previous_close = base_price * (1.0 + rng.gen_range(-1.0..1.0) * quotes::REFERENCE_BAND);
    let change = price - previous_close;
    let change_pct = change / previous_close * 100.0;

    let open = previous_close * (1.0 + rng.gen_range(-1.0..1.0) * quotes::REFERENCE_BAND);
    let range = price * (quotes::RANGE_MIN + rng.gen_range(0.0..1.0) * quotes::RANGE_SPREAD);
    let high = price.max(open) + rng.gen_range(0.0..1.0) * range;
    let low = price.min(open) - rng.gen_range(0.0..1.0) * range;

    let volume = (base_price * VOLUME_SCALE * (1.0 + rng.gen_range(0.0..1.0))).round() as u64;

    // Only stocks get a fabricated market cap.
    let market_cap = match instrument.kind {
        InstrumentKind::Stock => {
            let shares =
                rng.gen_range(quotes::MIN_SHARES_B..quotes::MAX_SHARES_B).round() * 1e9;
            Some(round_2dp(price * shares))
        }
        _ => None,
    };

    InstrumentQuote {
        symbol: instrument.symbol.clone(),
        price: round_2dp(price),
        change: round_2dp(change),
        change_pct: round_2dp(change_pct),
        open: round_2dp(open),
        high: round_2dp(high),
        low: round_2dp(low),
        previous_close: round_2dp(previous_close),
        volume,
        market_cap,
        timestamp_ms: now_timestamp_ms(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::InstrumentCatalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn quote_range_brackets_price_and_open() {
        let table = SymbolTable::default();
        let catalog = InstrumentCatalog::default();
        let mut rng = StdRng::seed_from_u64(3);

        for instrument in catalog.all() {
            let quote = generate_quote(&table, instrument, &mut rng);
            assert!(quote.high >= quote.price.max(quote.open), "{quote:?}");
            assert!(quote.low <= quote.price.min(quote.open), "{quote:?}");
        }
    }

    #[test]
    fn change_figures_are_consistent() {
        let table = SymbolTable::default();
        let catalog = InstrumentCatalog::default();
        let instrument = catalog.get("AAPL").unwrap();
        let mut rng = StdRng::seed_from_u64(8);

        let quote = generate_quote(&table, instrument, &mut rng);
        let expected = round_2dp(quote.price - quote.previous_close);
        // Rounding happens per field, so allow a couple cents of slack.
        assert!((quote.change - expected).abs() <= 0.021, "{quote:?}");
    }

    #[test]
    fn only_stocks_carry_a_market_cap() {
        let table = SymbolTable::default();
        let catalog = InstrumentCatalog::default();
        let mut rng = StdRng::seed_from_u64(1);

        for instrument in catalog.all() {
            let quote = generate_quote(&table, instrument, &mut rng);
            match instrument.kind {
                InstrumentKind::Stock => assert!(quote.market_cap.is_some()),
                _ => assert!(quote.market_cap.is_none()),
            }
        }
    }
}
