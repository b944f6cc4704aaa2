//! MACD unit tests

use coinsage::indicators::macd::macd_series;

#[test]
fn flat_series_is_zero_everywhere() {
    let closes = [30_000.0; 60];
    let (macd, signal) = macd_series(&closes, 12, 26, 9);

    assert!(macd.iter().all(|&v| v == 0.0));
    assert!(signal.iter().all(|&v| v == 0.0));
}

#[test]
fn single_point_seeds_both_lines_at_zero() {
    let (macd, signal) = macd_series(&[500.0], 12, 26, 9);
    assert_eq!(macd, vec![0.0]);
    assert_eq!(signal, vec![0.0]);
}

#[test]
fn output_lengths_match_input() {
    let closes: Vec<f64> = (1..=80).map(|i| i as f64).collect();
    let (macd, signal) = macd_series(&closes, 12, 26, 9);
    assert_eq!(macd.len(), 80);
    assert_eq!(signal.len(), 80);
}

#[test]
fn uptrend_puts_macd_above_signal() {
    let closes: Vec<f64> = (0..100).map(|i| 100.0 + i as f64 * 2.0).collect();
    let (macd, signal) = macd_series(&closes, 12, 26, 9);

    let last_macd = *macd.last().unwrap();
    let last_signal = *signal.last().unwrap();
    assert!(last_macd > 0.0, "fast EMA should lead in an uptrend");
    assert!(
        last_macd > last_signal,
        "signal line should lag a rising MACD"
    );
}

#[test]
fn recomputation_is_bit_identical() {
    let closes: Vec<f64> = (0..90)
        .map(|i| 200.0 + (i as f64 * 0.3).sin() * 10.0)
        .collect();
    let first = macd_series(&closes, 12, 26, 9);
    let second = macd_series(&closes, 12, 26, 9);
    assert_eq!(first, second);
}
