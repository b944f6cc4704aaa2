//! MACD (Moving Average Convergence Divergence) indicator

use super::ema::ema_series;

/// Point-wise MACD line and signal line over the full close series.
///
/// MACD = EMA(fast) - EMA(slow) of the closes; the signal line is an
/// EMA(signal) of the MACD series itself, seeded by the first MACD
/// value. Both lines are defined from day 1 because every EMA here is
/// seeded from its first input.
pub fn macd_series(
    closes: &[f64],
    fast_span: usize,
    slow_span: usize,
    signal_span: usize,
) -> (Vec<f64>, Vec<f64>) {
    let fast = ema_series(closes, fast_span);
    let slow = ema_series(closes, slow_span);

    let macd: Vec<f64> = fast
        .iter()
        .zip(slow.iter())
        .map(|(f, s)| f - s)
        .collect();

    let signal = ema_series(&macd, signal_span);
    (macd, signal)
}
