//! Rolling SMA unit tests

use coinsage::indicators::sma::rolling_sma;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn window_means_are_exact() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    let out = rolling_sma(&values, 3);

    assert_eq!(out.len(), 5);
    assert_eq!(out[0], None);
    assert_eq!(out[1], None);
    assert_close(out[2].unwrap(), 2.0);
    assert_close(out[3].unwrap(), 3.0);
    assert_close(out[4].unwrap(), 4.0);
}

#[test]
fn undefined_until_period_values_exist() {
    let values = [10.0, 11.0];
    assert_eq!(rolling_sma(&values, 3), vec![None, None]);
}

#[test]
fn period_one_is_identity() {
    let values = [7.0, 8.0, 9.0];
    let out = rolling_sma(&values, 1);
    assert_eq!(out, vec![Some(7.0), Some(8.0), Some(9.0)]);
}

#[test]
fn last_value_is_mean_of_trailing_window() {
    let values: Vec<f64> = (1..=60).map(|i| i as f64).collect();
    let out = rolling_sma(&values, 50);

    // Mean of 11..=60.
    let expected: f64 = (11..=60).map(|i| i as f64).sum::<f64>() / 50.0;
    assert_close(out.last().unwrap().unwrap(), expected);
    assert_eq!(out.iter().filter(|v| v.is_none()).count(), 49);
}

#[test]
fn empty_input_yields_empty_output() {
    assert_eq!(rolling_sma(&[], 3), Vec::<Option<f64>>::new());
}
