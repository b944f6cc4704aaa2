//! SMA (Simple Moving Average) indicator

/// Rolling simple moving average over a trailing window.
///
/// Returns one entry per input value; `None` until `period` values exist.
pub fn rolling_sma(values: &[f64], period: usize) -> Vec<Option<f64>> {
    assert!(period > 0, "SMA period must be greater than zero");

    if values.len() < period {
        return vec![None; values.len()];
    }

    let mut out = vec![None; period - 1];
    let mut sum: f64 = values.iter().take(period).sum();
    out.push(Some(sum / period as f64));

    for i in period..values.len() {
        sum += values[i] - values[i - period];
        out.push(Some(sum / period as f64));
    }
    out
}
