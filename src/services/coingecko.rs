//! CoinGecko market data provider implementation.

use std::time::Duration;

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::{TimeZone, Utc};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::MarketDataError;
use crate::models::{PricePoint, PriceSeries};

use super::market_data::MarketDataProvider;

const DEFAULT_BASE_URL: &str = "https://api.coingecko.com";

/// Daily close history from the CoinGecko `market_chart` endpoint.
///
/// Transport failures are retried with exponential backoff; HTTP error
/// statuses and malformed payloads fail immediately. Intraday tail
/// points sharing a calendar day with the previous point are collapsed
/// to the most recent one so the resulting series holds one point per
/// day.
pub struct CoinGeckoProvider {
    http: reqwest::Client,
    base_url: String,
    coin_id: String,
    vs_currency: String,
}

#[derive(Debug, Deserialize)]
struct MarketChart {
    prices: Vec<(f64, f64)>,
}

impl CoinGeckoProvider {
    pub fn new(coin_id: impl Into<String>, vs_currency: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            coin_id: coin_id.into(),
            vs_currency: vs_currency.into(),
        }
    }

    /// Point the provider at a different host, e.g. a mock server in
    /// tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn fetch_chart(&self, days: u32) -> Result<MarketChart, MarketDataError> {
        let url = format!(
            "{}/api/v3/coins/{}/market_chart",
            self.base_url, self.coin_id
        );
        let response = self
            .http
            .get(&url)
            .query(&[
                ("vs_currency", self.vs_currency.clone()),
                ("days", days.to_string()),
                ("interval", "daily".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Status {
                status: status.as_u16(),
            });
        }

        // Decode failures are payload problems, not transport problems,
        // so they must not be retried.
        response
            .json::<MarketChart>()
            .await
            .map_err(|e| MarketDataError::Payload(e.to_string()))
    }

    fn into_series(chart: MarketChart) -> Result<PriceSeries, MarketDataError> {
        let mut points: Vec<PricePoint> = Vec::with_capacity(chart.prices.len());

        for (ts_ms, close) in chart.prices {
            let timestamp = Utc
                .timestamp_millis_opt(ts_ms as i64)
                .single()
                .ok_or_else(|| {
                    MarketDataError::Payload(format!("timestamp {} out of range", ts_ms))
                })?;
            // CoinGecko appends the current intraday price after the
            // day's midnight point; keep the freshest one per day.
            if points
                .last()
                .is_some_and(|last| last.timestamp.date_naive() == timestamp.date_naive())
            {
                points.pop();
            }
            points.push(PricePoint::new(timestamp, close));
        }

        debug!(count = points.len(), "parsed market chart payload");
        Ok(PriceSeries::new(points)?)
    }
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    async fn daily_closes(&self, days: u32) -> Result<PriceSeries, MarketDataError> {
        info!(coin = %self.coin_id, days, "fetching daily close history");

        let chart = (|| self.fetch_chart(days))
            .retry(
                ExponentialBuilder::default()
                    .with_min_delay(Duration::from_millis(200))
                    .with_max_times(3),
            )
            .when(|err| matches!(err, MarketDataError::Http(_)))
            .notify(|err, delay| {
                warn!(error = %err, delay_ms = delay.as_millis() as u64, "retrying market data fetch");
            })
            .await?;

        Self::into_series(chart)
    }
}
