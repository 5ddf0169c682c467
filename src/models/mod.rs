mod quote;
mod request;
mod series;

pub use quote::{InstrumentQuote, InstrumentWithQuote};
pub use request::SeriesRequest;
pub use series::MarketSeries;
