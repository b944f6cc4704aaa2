//! RSI (Relative Strength Index) indicator

/// Rolling RSI over trailing simple means of day-over-day gains and
/// losses.
///
/// RSI = 100 - (100 / (1 + RS)), RS = avg gain / avg loss, where the
/// averages are plain rolling means over the last `period` deltas (not
/// Wilder smoothing). The first delta exists at index 1, so the first
/// defined RSI sits at index `period`.
///
/// Degenerate windows use a fixed convention:
/// - avg loss = 0 with avg gain > 0 saturates to 100,
/// - a fully flat window (both averages zero) resolves to a neutral 50.
pub fn rolling_rsi(values: &[f64], period: usize) -> Vec<Option<f64>> {
    assert!(period > 0, "RSI period must be greater than zero");

    let mut out = vec![None; values.len()];
    if values.len() <= period {
        return out;
    }

    let mut gains = Vec::with_capacity(values.len() - 1);
    let mut losses = Vec::with_capacity(values.len() - 1);
    for pair in values.windows(2) {
        let delta = pair[1] - pair[0];
        gains.push(delta.max(0.0));
        losses.push((-delta).max(0.0));
    }

    let mut gain_sum: f64 = gains.iter().take(period).sum();
    let mut loss_sum: f64 = losses.iter().take(period).sum();

    // Delta k covers values[k]..values[k+1]; the window of the last
    // `period` deltas is complete from value index `period` onward.
    for i in period..values.len() {
        let avg_gain = gain_sum / period as f64;
        let avg_loss = loss_sum / period as f64;
        out[i] = Some(rsi_from_averages(avg_gain, avg_loss));

        if i + 1 < values.len() {
            gain_sum += gains[i] - gains[i - period];
            loss_sum += losses[i] - losses[i - period];
        }
    }
    out
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            // Flat window: no momentum either way.
            return 50.0;
        }
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}
