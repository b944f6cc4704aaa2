//! Rolling RSI unit tests

use coinsage::indicators::rsi::rolling_rsi;

#[test]
fn undefined_for_short_series() {
    let values: Vec<f64> = (1..=14).map(|i| i as f64).collect();
    let out = rolling_rsi(&values, 14);
    assert!(out.iter().all(|v| v.is_none()));
}

#[test]
fn first_defined_at_index_fourteen() {
    let values: Vec<f64> = (1..=20).map(|i| i as f64).collect();
    let out = rolling_rsi(&values, 14);

    for v in out.iter().take(14) {
        assert_eq!(*v, None);
    }
    for v in out.iter().skip(14) {
        assert!(v.is_some());
    }
}

#[test]
fn all_gains_saturate_to_hundred() {
    let values: Vec<f64> = (1..=20).map(|i| i as f64).collect();
    let out = rolling_rsi(&values, 14);
    for v in out.iter().skip(14) {
        assert_eq!(*v, Some(100.0));
    }
}

#[test]
fn all_losses_reach_zero() {
    let values: Vec<f64> = (1..=20).map(|i| 100.0 - i as f64).collect();
    let out = rolling_rsi(&values, 14);
    for v in out.iter().skip(14) {
        assert_eq!(*v, Some(0.0));
    }
}

#[test]
fn flat_window_resolves_to_neutral_fifty() {
    let values = [30_000.0; 20];
    let out = rolling_rsi(&values, 14);
    for v in out.iter().skip(14) {
        assert_eq!(*v, Some(50.0));
    }
}

#[test]
fn crafted_window_gives_exact_value() {
    // 15 values, 14 deltas: ten of -6.0 then four of +10.0.
    // avg_gain / avg_loss = 40 / 60, RSI = 100 - 100 / (1 + 2/3) = 40.
    let mut values = vec![1_000.0];
    for _ in 0..10 {
        values.push(values.last().unwrap() - 6.0);
    }
    for _ in 0..4 {
        values.push(values.last().unwrap() + 10.0);
    }
    assert_eq!(values.len(), 15);

    let out = rolling_rsi(&values, 14);
    let rsi = out[14].expect("defined at index 14");
    assert!((rsi - 40.0).abs() < 1e-9, "expected 40.0, got {rsi}");
}

#[test]
fn always_bounded_when_defined() {
    let values: Vec<f64> = (0..120)
        .map(|i| 500.0 + (i as f64 * 0.7).sin() * 25.0 + (i % 7) as f64)
        .collect();
    let out = rolling_rsi(&values, 14);
    for v in out.iter().flatten() {
        assert!((0.0..=100.0).contains(v), "RSI out of bounds: {v}");
    }
}
