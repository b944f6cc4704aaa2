//! Environment configuration tests
//!
//! Kept as a single test so env-var mutation cannot race with a
//! parallel test in this binary.

use std::env;

use coinsage::config::Config;

#[test]
fn defaults_and_env_overrides() {
    for var in [
        "COINSAGE_COIN",
        "COINSAGE_VS_CURRENCY",
        "COINSAGE_DAYS",
        "COINSAGE_REFERENCE_PRICE",
        "COINSAGE_DIVERGENCE_WARN_PCT",
        "COINSAGE_RSI_OVERBOUGHT",
        "COINSAGE_RSI_OVERSOLD",
    ] {
        env::remove_var(var);
    }

    let config = Config::from_env().unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.coin_id, "bitcoin");
    assert_eq!(config.days, 200);
    assert_eq!(config.reference_price, None);

    env::set_var("COINSAGE_COIN", "ethereum");
    env::set_var("COINSAGE_DAYS", "90");
    env::set_var("COINSAGE_REFERENCE_PRICE", "41250.5");
    env::set_var("COINSAGE_RSI_OVERBOUGHT", "70");

    let config = Config::from_env().unwrap();
    assert_eq!(config.coin_id, "ethereum");
    assert_eq!(config.days, 90);
    assert_eq!(config.reference_price, Some(41250.5));
    assert_eq!(config.rules.rsi_overbought, 70.0);

    env::set_var("COINSAGE_DAYS", "not-a-number");
    assert!(Config::from_env().is_err());
    env::set_var("COINSAGE_DAYS", "90");

    env::set_var("COINSAGE_REFERENCE_PRICE", "-5");
    assert!(Config::from_env().is_err());

    for var in [
        "COINSAGE_COIN",
        "COINSAGE_DAYS",
        "COINSAGE_REFERENCE_PRICE",
        "COINSAGE_RSI_OVERBOUGHT",
    ] {
        env::remove_var(var);
    }
}
