//! Environment-based configuration.

use std::env;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::signals::RuleConfig;

/// Deployment environment, used to select the log format.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// CoinGecko coin identifier, e.g. `bitcoin`.
    pub coin_id: String,
    pub vs_currency: String,
    /// How many days of history to request.
    pub days: u32,
    /// Externally observed price substituted into rule comparisons.
    pub reference_price: Option<f64>,
    /// Warn when the reference price diverges from the latest close by
    /// more than this percentage.
    pub divergence_warn_pct: f64,
    pub rules: RuleConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coin_id: "bitcoin".to_string(),
            vs_currency: "usd".to_string(),
            days: 200,
            reference_price: None,
            divergence_warn_pct: 1.5,
            rules: RuleConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(coin) = env::var("COINSAGE_COIN") {
            config.coin_id = coin;
        }
        if let Ok(currency) = env::var("COINSAGE_VS_CURRENCY") {
            config.vs_currency = currency;
        }
        if let Some(days) = parse_var::<u32>("COINSAGE_DAYS")? {
            config.days = days;
        }
        if let Some(price) = parse_var::<f64>("COINSAGE_REFERENCE_PRICE")? {
            if price < 0.0 {
                return Err(ConfigError::NegativeValue {
                    var: "COINSAGE_REFERENCE_PRICE",
                    value: price,
                });
            }
            config.reference_price = Some(price);
        }
        if let Some(pct) = parse_var::<f64>("COINSAGE_DIVERGENCE_WARN_PCT")? {
            config.divergence_warn_pct = pct;
        }
        if let Some(threshold) = parse_var::<f64>("COINSAGE_RSI_OVERBOUGHT")? {
            config.rules.rsi_overbought = threshold;
        }
        if let Some(threshold) = parse_var::<f64>("COINSAGE_RSI_OVERSOLD")? {
            config.rules.rsi_oversold = threshold;
        }

        Ok(config)
    }
}

fn parse_var<T: FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value: raw.clone() }),
        Err(_) => Ok(None),
    }
}
