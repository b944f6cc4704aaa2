//! Market data provider interface.

use async_trait::async_trait;

use crate::error::MarketDataError;
use crate::models::PriceSeries;

/// Source of historical daily closes for the configured asset.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch roughly `days` daily close prices, oldest first, one point
    /// per calendar day.
    async fn daily_closes(&self, days: u32) -> Result<PriceSeries, MarketDataError>;
}
