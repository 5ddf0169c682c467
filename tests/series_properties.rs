use rand::rngs::StdRng;
use rand::SeedableRng;
use strum::IntoEnumIterator;

use mocktape::utils::now_timestamp_ms;
use mocktape::{optimized_limit, SeriesGenerator, SeriesRequest, Timeframe};

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn every_timeframe_produces_well_formed_evenly_spaced_candles() {
    let generator = SeriesGenerator::default();

    for (i, timeframe) in Timeframe::iter().enumerate() {
        let req = SeriesRequest::new("BTC-USD", timeframe).with_limit(60);
        let series = generator.generate_with(&req, &mut seeded(i as u64)).unwrap();

        assert_eq!(series.len(), 60);
        let interval = timeframe.interval_ms();
        for pair in series.data.windows(2) {
            assert!(pair[1].timestamp_ms > pair[0].timestamp_ms);
            assert_eq!(pair[1].timestamp_ms - pair[0].timestamp_ms, interval);
        }
        for candle in &series.data {
            assert!(candle.is_well_formed(), "{timeframe} candle: {candle:?}");
            assert!(candle.low <= candle.open && candle.open <= candle.high);
            assert!(candle.low <= candle.close && candle.close <= candle.high);
        }
    }
}

#[test]
fn daily_100_candle_series_ends_one_interval_before_now() {
    let generator = SeriesGenerator::default();
    let req = SeriesRequest::new("MSFT", Timeframe::D1).with_limit(100);

    let before = now_timestamp_ms();
    let series = generator.generate_with(&req, &mut seeded(99)).unwrap();
    let after = now_timestamp_ms();

    assert_eq!(series.len(), 100);
    let interval = Timeframe::D1.interval_ms();
    let last = series.data.last().unwrap().timestamp_ms;
    let first = series.data.first().unwrap().timestamp_ms;
    assert!(last >= before - interval && last <= after - interval);
    assert_eq!(last - first, 99 * interval);
}

#[test]
fn crypto_is_statistically_more_volatile_than_forex() {
    let generator = SeriesGenerator::default();
    let mut crypto_wins = 0;
    let samples = 40;

    for seed in 0..samples {
        let btc = SeriesRequest::new("BTC-USD", Timeframe::D1).with_limit(120);
        let eur = SeriesRequest::new("EUR-USD", Timeframe::D1).with_limit(120);

        let btc_vol = generator
            .generate_with(&btc, &mut seeded(seed))
            .unwrap()
            .mean_abs_step_change();
        let eur_vol = generator
            .generate_with(&eur, &mut seeded(seed + 10_000))
            .unwrap()
            .mean_abs_step_change();

        if btc_vol > eur_vol {
            crypto_wins += 1;
        }
    }

    // 3% class volatility against 1% should dominate essentially always.
    assert!(crypto_wins > samples * 9 / 10, "crypto won {crypto_wins}/{samples}");
}

#[test]
fn known_symbols_anchor_near_their_base_prices() {
    let generator = SeriesGenerator::default();
    for (symbol, base) in [("AAPL", 180.0), ("BTC-USD", 53_000.0), ("GC=F", 1_970.0)] {
        for seed in 0..10u64 {
            let req = SeriesRequest::new(symbol, Timeframe::H1).with_limit(5);
            let series = generator.generate_with(&req, &mut seeded(seed)).unwrap();
            let first_open = series.data[0].open;
            assert!(
                (first_open - base).abs() / base < 0.05,
                "{symbol}: first open {first_open} vs base {base}"
            );
        }
    }
}

#[test]
fn volume_is_present_and_scales_with_base_price() {
    let generator = SeriesGenerator::default();
    let btc = SeriesRequest::new("BTC-USD", Timeframe::D1).with_limit(50);
    let eur = SeriesRequest::new("EUR-USD", Timeframe::D1).with_limit(50);

    let btc_series = generator.generate_with(&btc, &mut seeded(4)).unwrap();
    let eur_series = generator.generate_with(&eur, &mut seeded(4)).unwrap();

    let btc_avg: f64 =
        btc_series.data.iter().map(|c| c.volume as f64).sum::<f64>() / btc_series.len() as f64;
    let eur_avg: f64 =
        eur_series.data.iter().map(|c| c.volume as f64).sum::<f64>() / eur_series.len() as f64;

    // Base 53,000 against 1.08 leaves no room for overlap.
    assert!(btc_avg > eur_avg * 100.0);
}

#[test]
fn optimized_limit_bounds_match_the_documented_caps() {
    assert_eq!(optimized_limit(Timeframe::D1, 1000), 365);
    assert_eq!(optimized_limit(Timeframe::W1, 1000), 200);
    assert_eq!(optimized_limit(Timeframe::H1, 1000), 500);
    assert_eq!(optimized_limit(Timeframe::M30, 1000), 100);
}

#[test]
fn generated_series_echoes_request_parameters() {
    let generator = SeriesGenerator::default();
    let req = SeriesRequest::new("EUR-USD", Timeframe::W1).with_limit(12);
    let series = generator.generate_with(&req, &mut seeded(21)).unwrap();
    assert_eq!(series.symbol, "EUR-USD");
    assert_eq!(series.timeframe, Timeframe::W1);
    assert_eq!(series.len(), 12);
}
