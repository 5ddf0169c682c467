use std::time::Duration;

use async_trait::async_trait;

use crate::data::{optimized_limit, SeriesGenerator};
use crate::domain::Timeframe;
use crate::error::MarketError;
use crate::models::{MarketSeries, SeriesRequest};

/// Abstract interface for fetching market data.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch a historical candle series for a request.
    async fn historical(&self, req: &SeriesRequest) -> Result<MarketSeries, MarketError>;

    /// Fetch a series covering `days`, with the point count bounded per
    /// timeframe so long ranges stay drawable.
    async fn optimized_historical(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        days: i64,
    ) -> Result<MarketSeries, MarketError>;
}

/// Provider backed by the synthetic generator. Each call draws a fresh
/// thread RNG, so there is no shared state to coordinate; an optional
/// artificial delay reproduces the perceived latency of a real feed.
pub struct MockProvider {
    generator: SeriesGenerator,
    simulated_latency: Option<Duration>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(SeriesGenerator::default())
    }
}

impl MockProvider {
    pub fn new(generator: SeriesGenerator) -> Self {
        Self {
            generator,
            simulated_latency: None,
        }
    }

    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = Some(latency);
        self
    }

    async fn fake_network_delay(&self) {
        if let Some(latency) = self.simulated_latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl MarketDataProvider for MockProvider {
    async fn historical(&self, req: &SeriesRequest) -> Result<MarketSeries, MarketError> {
        self.fake_network_delay().await;
        log::debug!("historical fetch: {} {} x{}", req.symbol, req.timeframe, req.limit);
        self.generator.generate(req)
    }

    async fn optimized_historical(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        days: i64,
    ) -> Result<MarketSeries, MarketError> {
        self.fake_network_delay().await;
        let limit = optimized_limit(timeframe, days);
        let req = SeriesRequest::new(symbol, timeframe).with_limit(limit);
        self.generator.generate(&req)
    }
}
