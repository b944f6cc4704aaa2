//! External collaborators: upstream market data sources.

pub mod coingecko;
pub mod market_data;

pub use coingecko::CoinGeckoProvider;
pub use market_data::MarketDataProvider;
