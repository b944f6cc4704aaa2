use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SeriesError;

/// A single daily close observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self { timestamp, close }
    }
}

/// Validated daily price history.
///
/// Construction enforces the engine preconditions: at least one point,
/// timestamps strictly increasing, one point per calendar day. A value of
/// this type is always a valid input for indicator computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Result<Self, SeriesError> {
        if points.is_empty() {
            return Err(SeriesError::Empty);
        }
        for pair in points.windows(2) {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(SeriesError::NonMonotonic {
                    at: pair[1].timestamp,
                });
            }
            if pair[1].timestamp.date_naive() == pair[0].timestamp.date_naive() {
                return Err(SeriesError::DuplicateDay {
                    day: pair[1].timestamp.date_naive(),
                });
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        // A constructed series is never empty; kept for slice-like ergonomics.
        self.points.is_empty()
    }

    pub fn last(&self) -> &PricePoint {
        self.points.last().expect("series is non-empty by construction")
    }
}

/// One row of the annotated series: the close plus its six derived
/// indicator values. `None` marks an indicator that does not exist yet
/// because not enough history has accumulated. MACD and its signal line
/// are seeded from the first close and are defined from day 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
    pub rsi_14: Option<f64>,
    pub macd: f64,
    pub macd_signal: f64,
}

/// The price series annotated with indicator columns, same length and
/// order as the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedSeries {
    rows: Vec<IndicatorRow>,
}

impl AnnotatedSeries {
    pub(crate) fn from_rows(rows: Vec<IndicatorRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[IndicatorRow] {
        &self.rows
    }

    pub fn latest(&self) -> &IndicatorRow {
        self.rows.last().expect("annotated series is non-empty")
    }

    /// Build the classifier input from the final row, optionally carrying
    /// an externally observed reference price.
    pub fn observation(&self, reference_price: Option<f64>) -> LatestObservation {
        LatestObservation {
            row: *self.latest(),
            reference_price,
        }
    }
}

/// The final annotated row plus an optional reference price from another
/// venue. The reference price substitutes for the close in every price
/// comparison the classifier makes; indicator values always come from the
/// series' own history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatestObservation {
    pub row: IndicatorRow,
    pub reference_price: Option<f64>,
}

impl LatestObservation {
    /// The price used in rule comparisons.
    pub fn comparison_price(&self) -> f64 {
        self.reference_price.unwrap_or(self.row.close)
    }
}
