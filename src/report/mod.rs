//! Terminal rendering of the latest indicator values and the signal.

use chrono::Local;

use crate::models::{LatestObservation, SignalOutput};

/// Render the advisory block shown to the user: the six latest
/// indicator values, an optional reference-price divergence warning,
/// and the signal with its rationale.
pub fn render(obs: &LatestObservation, signal: &SignalOutput, divergence_warn_pct: f64) -> String {
    let row = &obs.row;
    let mut lines = vec![
        format!(
            "Date/Time       : {}",
            Local::now().format("%Y-%m-%d %H:%M")
        ),
        format!("Latest close    : ${:.2}", row.close),
    ];

    if let Some(reference) = obs.reference_price {
        lines.push(format!("Reference price : ${:.2}", reference));
        if let Some(warning) = divergence_warning(row.close, reference, divergence_warn_pct) {
            lines.push(format!("Warning         : {}", warning));
        }
    }

    lines.push(format!("RSI (14-day)    : {}", fmt_opt(row.rsi_14)));
    lines.push(format!("SMA 50          : {}", fmt_opt_price(row.sma_50)));
    lines.push(format!("SMA 200         : {}", fmt_opt_price(row.sma_200)));
    lines.push(format!("MACD            : {:.4}", row.macd));
    lines.push(format!("MACD Signal     : {:.4}", row.macd_signal));
    lines.push(format!("Reason          : {}", signal.rationale));
    lines.push(format!(
        "Signal          : {} - {}",
        signal.kind.as_str(),
        signal.kind.advice()
    ));

    lines.join("\n")
}

/// Warning text when the reference price and the series' own latest
/// close diverge beyond the threshold. Presentational only; the
/// classifier has already used the reference price regardless.
pub fn divergence_warning(
    latest_close: f64,
    reference_price: f64,
    warn_pct: f64,
) -> Option<String> {
    if latest_close == 0.0 {
        return None;
    }
    let divergence_pct = ((reference_price - latest_close) / latest_close * 100.0).abs();
    if divergence_pct > warn_pct {
        Some(format!(
            "reference price ${:.2} diverges {:.1}% from latest close ${:.2}",
            reference_price, divergence_pct, latest_close
        ))
    } else {
        None
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.2}", v))
}

fn fmt_opt_price(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("${:.2}", v))
}
