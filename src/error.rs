/// Unified error type for the mock data layer.
#[derive(Debug, PartialEq, Eq)]
pub enum MarketError {
    InvalidParameter(String),
    NotFound(String),
    Forbidden(String),
}

impl std::fmt::Display for MarketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "invalid_parameter: {msg}"),
            Self::NotFound(msg) => write!(f, "not_found: {msg}"),
            Self::Forbidden(msg) => write!(f, "forbidden: {msg}"),
        }
    }
}

impl std::error::Error for MarketError {}
