use serde::{Deserialize, Serialize};

use crate::config::constants::DEFAULT_SERIES_LIMIT;
use crate::domain::Timeframe;
use crate::error::MarketError;

/// Parameters for one historical-series request. `limit` stays signed so a
/// caller-supplied negative value can be rejected instead of wrapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRequest {
    pub symbol: String,
    pub timeframe: Timeframe,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_SERIES_LIMIT
}

impl SeriesRequest {
    pub fn new(symbol: impl Into<String>, timeframe: Timeframe) -> Self {
        Self {
            symbol: symbol.into(),
            timeframe,
            limit: DEFAULT_SERIES_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// A zero limit is a legal request for an empty series; a negative one
    /// is a caller bug.
    pub fn validated_limit(&self) -> Result<usize, MarketError> {
        if self.limit < 0 {
            return Err(MarketError::InvalidParameter(format!(
                "limit must be non-negative, got {}",
                self.limit
            )));
        }
        Ok(self.limit as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit_is_100() {
        let req = SeriesRequest::new("AAPL", Timeframe::D1);
        assert_eq!(req.limit, 100);
    }

    #[test]
    fn negative_limit_is_rejected() {
        let req = SeriesRequest::new("AAPL", Timeframe::D1).with_limit(-1);
        assert!(matches!(
            req.validated_limit(),
            Err(MarketError::InvalidParameter(_))
        ));
    }

    #[test]
    fn zero_limit_is_allowed() {
        let req = SeriesRequest::new("AAPL", Timeframe::D1).with_limit(0);
        assert_eq!(req.validated_limit().unwrap(), 0);
    }

    #[test]
    fn limit_defaults_when_missing_from_json() {
        let req: SeriesRequest =
            serde_json::from_str(r#"{"symbol":"AAPL","timeframe":"D1"}"#).unwrap();
        assert_eq!(req.limit, 100);
    }
}
