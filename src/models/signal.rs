use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of advisory labels. `as_str` values are the stable,
/// machine-readable form; `advice` carries the action text shown to the
/// user next to the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalKind {
    Sell,
    Buy,
    BuildingBuyZone,
    Neutral,
}

impl SignalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Sell => "Sell",
            SignalKind::Buy => "Buy",
            SignalKind::BuildingBuyZone => "Building-Buy-Zone",
            SignalKind::Neutral => "Neutral",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            SignalKind::Sell => "Sell all",
            SignalKind::Buy => "Invest all",
            SignalKind::BuildingBuyZone => "Invest some, ready for more",
            SignalKind::Neutral => "Hold cash",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifier output: the label plus a human-readable audit trail naming
/// the indicator values that were compared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalOutput {
    pub kind: SignalKind,
    pub rationale: String,
}

impl SignalOutput {
    pub fn new(kind: SignalKind, rationale: impl Into<String>) -> Self {
        Self {
            kind,
            rationale: rationale.into(),
        }
    }
}
