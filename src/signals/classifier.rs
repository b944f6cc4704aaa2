//! Ordered decision list over the latest annotated observation.

use crate::models::{LatestObservation, SignalKind, SignalOutput};

use super::rules::RuleConfig;

/// Classify the latest observation into exactly one advisory signal.
///
/// Rules are evaluated in priority order, first match wins: Sell, Buy,
/// Building-Buy-Zone, Neutral. Any rule that depends on an indicator
/// still marked `None` is treated as not satisfied and evaluation falls
/// through; the function is total and never panics.
///
/// Price comparisons use `comparison_price()`, so a supplied reference
/// price substitutes for the series' own close while the indicator
/// values themselves stay untouched.
pub fn classify(obs: &LatestObservation, rules: &RuleConfig) -> SignalOutput {
    let row = &obs.row;
    let price = obs.comparison_price();

    let rsi_overbought = row
        .rsi_14
        .is_some_and(|rsi| rsi > rules.rsi_overbought);
    let bearish_cross = row.macd < row.macd_signal;
    let above_both_mas = matches!(
        (row.sma_50, row.sma_200),
        (Some(s50), Some(s200)) if price > s50 && price > s200
    );
    let bearish_sell =
        bearish_cross && (!rules.sell_requires_trend_confirmation || above_both_mas);

    // 1. Sell: overbought momentum, or a bearish MACD cross while the
    //    price still trades above both moving averages.
    if rsi_overbought || bearish_sell {
        let rationale = match (rsi_overbought, bearish_sell) {
            (true, true) => format!(
                "RSI = {:.2} (> {:.0}) and MACD = {:.4} < signal = {:.4}: \
                 overbought with weakening momentum",
                row.rsi_14.unwrap_or_default(),
                rules.rsi_overbought,
                row.macd,
                row.macd_signal,
            ),
            (true, false) => format!(
                "RSI = {:.2} (> {:.0}): overbought, pullback likely",
                row.rsi_14.unwrap_or_default(),
                rules.rsi_overbought,
            ),
            _ => format!(
                "MACD = {:.4} < signal = {:.4} with price = {} above \
                 SMA50 = {} and SMA200 = {}: bearish momentum at trend highs",
                row.macd,
                row.macd_signal,
                fmt_price(price),
                fmt_opt_price(row.sma_50),
                fmt_opt_price(row.sma_200),
            ),
        };
        return SignalOutput::new(SignalKind::Sell, rationale);
    }

    // 2. Buy: oversold dip below SMA50 inside an intact long-term uptrend,
    //    with momentum already turning.
    if let (Some(rsi), Some(s50), Some(s200)) = (row.rsi_14, row.sma_50, row.sma_200) {
        if row.macd > row.macd_signal
            && rsi < rules.rsi_oversold
            && price < s50
            && price > s200
        {
            let rationale = format!(
                "RSI = {:.2} (< {:.0}), price = {} < SMA50 = {} but above \
                 SMA200 = {}, MACD = {:.4} > signal = {:.4}: strong reversal setup",
                rsi,
                rules.rsi_oversold,
                fmt_price(price),
                fmt_price(s50),
                fmt_price(s200),
                row.macd,
                row.macd_signal,
            );
            return SignalOutput::new(SignalKind::Buy, rationale);
        }
    }

    // 3. Building zone: RSI lifting out of oversold while the price holds
    //    at or under SMA50 and momentum points up.
    if let (Some(rsi), Some(s50)) = (row.rsi_14, row.sma_50) {
        let (low, high) = rules.building_zone_band;
        if rsi >= low && rsi < high && price <= s50 && row.macd > row.macd_signal {
            let rationale = format!(
                "RSI = {:.2} ({:.0}-{:.0}), price = {} <= SMA50 = {}, \
                 MACD = {:.4} > signal = {:.4}: early accumulation",
                rsi,
                low,
                high,
                fmt_price(price),
                fmt_price(s50),
                row.macd,
                row.macd_signal,
            );
            return SignalOutput::new(SignalKind::BuildingBuyZone, rationale);
        }
    }

    // 4. Default.
    let rationale = format!(
        "RSI = {}, MACD = {:.4}, signal = {:.4}, price = {}, SMA50 = {}, \
         SMA200 = {}: no strong alignment across indicators",
        fmt_opt(row.rsi_14),
        row.macd,
        row.macd_signal,
        fmt_price(price),
        fmt_opt_price(row.sma_50),
        fmt_opt_price(row.sma_200),
    );
    SignalOutput::new(SignalKind::Neutral, rationale)
}

fn fmt_price(value: f64) -> String {
    format!("${:.2}", value)
}

fn fmt_opt_price(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), fmt_price)
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.2}", v))
}
