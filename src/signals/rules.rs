//! Threshold configuration for the decision list.

use serde::{Deserialize, Serialize};

/// One coherent parameterization of the rule set.
///
/// `building_zone_band` is a half-open RSI interval `[low, high)`. When
/// `sell_requires_trend_confirmation` is set, a bearish MACD cross only
/// sells if the price also sits above both moving averages; without it,
/// the cross alone is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    pub building_zone_band: (f64, f64),
    pub sell_requires_trend_confirmation: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            rsi_oversold: 35.0,
            rsi_overbought: 65.0,
            building_zone_band: (35.0, 45.0),
            sell_requires_trend_confirmation: true,
        }
    }
}
