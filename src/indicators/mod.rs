//! Indicator engine: annotates a daily price series with the derived
//! indicator columns the classifier consumes.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

use crate::models::{AnnotatedSeries, IndicatorRow, PriceSeries};

pub const SMA_FAST_PERIOD: usize = 50;
pub const SMA_SLOW_PERIOD: usize = 200;
pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST_SPAN: usize = 12;
pub const MACD_SLOW_SPAN: usize = 26;
pub const MACD_SIGNAL_SPAN: usize = 9;

/// Compute all six indicator columns for the series.
///
/// Pure and deterministic: identical input produces bit-identical
/// output. `PriceSeries` construction already enforces the input
/// preconditions, so computation itself cannot fail. Indicators without
/// enough trailing history are `None`; MACD and its signal line are
/// seeded from the first close and carry a value on every row.
pub fn compute(series: &PriceSeries) -> AnnotatedSeries {
    let closes = series.closes();

    let sma_50 = sma::rolling_sma(&closes, SMA_FAST_PERIOD);
    let sma_200 = sma::rolling_sma(&closes, SMA_SLOW_PERIOD);
    let rsi_14 = rsi::rolling_rsi(&closes, RSI_PERIOD);
    // The signal line's EMA recursion needs the finished MACD column, so
    // the price EMAs must be computed before it.
    let (macd, macd_signal) =
        macd::macd_series(&closes, MACD_FAST_SPAN, MACD_SLOW_SPAN, MACD_SIGNAL_SPAN);

    let rows = series
        .points()
        .iter()
        .enumerate()
        .map(|(i, point)| IndicatorRow {
            timestamp: point.timestamp,
            close: point.close,
            sma_50: sma_50[i],
            sma_200: sma_200[i],
            rsi_14: rsi_14[i],
            macd: macd[i],
            macd_signal: macd_signal[i],
        })
        .collect();

    AnnotatedSeries::from_rows(rows)
}
