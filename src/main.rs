use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tabled::{Table, Tabled};

use mocktape::config::constants::DEFAULT_SERIES_LIMIT;
use mocktape::utils::epoch_ms_to_date_string;
use mocktape::{
    optimized_limit, Cli, InstrumentCatalog, MarketDataProvider, MarketSeries, MockProvider,
    SeriesGenerator, SeriesRequest, SymbolTable, Timeframe,
};

#[derive(Tabled)]
struct CandleRow {
    time: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
}

#[derive(Tabled)]
struct QuoteRow {
    symbol: String,
    name: String,
    kind: String,
    price: f64,
    change_pct: f64,
    volume: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();

    if args.quotes {
        print_quote_board(&args);
        return Ok(());
    }

    let timeframe = Timeframe::parse_lossy(&args.timeframe);
    let limit = match (args.limit, args.days) {
        (Some(limit), _) => limit,
        (None, Some(days)) => optimized_limit(timeframe, days),
        (None, None) => DEFAULT_SERIES_LIMIT,
    };
    let req = SeriesRequest::new(&args.symbol, timeframe).with_limit(limit);

    log::info!("Generating {} {} candles for {}", limit, timeframe, args.symbol);

    let series = match args.seed {
        // Seeded runs are reproducible and skip the fake latency.
        Some(seed) => {
            let generator = SeriesGenerator::new(SymbolTable::default());
            generator.generate_with(&req, &mut StdRng::seed_from_u64(seed))?
        }
        None => {
            let provider =
                MockProvider::default().with_simulated_latency(Duration::from_millis(800));
            provider.historical(&req).await?
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&series)?);
    } else {
        print_series(&series);
    }

    Ok(())
}

fn print_series(series: &MarketSeries) {
    let rows: Vec<CandleRow> = series
        .data
        .iter()
        .map(|c| CandleRow {
            time: epoch_ms_to_date_string(c.timestamp_ms),
            open: c.open,
            high: c.high,
            low: c.low,
            close: c.close,
            volume: c.volume,
        })
        .collect();

    println!("{}", Table::new(rows));
    log::info!(
        "{} {}: {} candles, mean |step| {:.4}%",
        series.symbol,
        series.timeframe,
        series.len(),
        series.mean_abs_step_change() * 100.0
    );
}

fn print_quote_board(args: &Cli) {
    let catalog = InstrumentCatalog::default();
    let table = SymbolTable::default();

    let quoted = match args.seed {
        Some(seed) => catalog.with_quotes(&table, &mut StdRng::seed_from_u64(seed)),
        None => catalog.with_quotes(&table, &mut rand::thread_rng()),
    };

    let rows: Vec<QuoteRow> = quoted
        .iter()
        .map(|q| QuoteRow {
            symbol: q.instrument.symbol.clone(),
            name: q.instrument.name.clone(),
            kind: q.instrument.kind.to_string(),
            price: q.quote.price,
            change_pct: q.quote.change_pct,
            volume: q.quote.volume,
        })
        .collect();

    println!("{}", Table::new(rows));
}
