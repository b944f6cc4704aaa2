//! EMA (Exponential Moving Average) indicator

/// Recursive exponential moving average with smoothing factor
/// `alpha = 2 / (span + 1)`.
///
/// The recursion is seeded with the first input value, so the output is
/// defined from index 0 with no warm-up window. Early values are
/// dominated by the seed and only become meaningful as history
/// accumulates. The update uses the delta form
/// `prev + alpha * (value - prev)`, which keeps a constant input series
/// exactly constant.
pub fn ema_series(values: &[f64], span: usize) -> Vec<f64> {
    assert!(span > 0, "EMA span must be greater than zero");

    let mut out = Vec::with_capacity(values.len());
    let alpha = 2.0 / (span as f64 + 1.0);

    let mut prev = match values.first() {
        Some(&first) => first,
        None => return out,
    };
    out.push(prev);

    for &value in &values[1..] {
        prev += alpha * (value - prev);
        out.push(prev);
    }
    out
}
