//! Shared data models spanning the engine layers.

pub mod price;
pub mod signal;

pub use price::{AnnotatedSeries, IndicatorRow, LatestObservation, PricePoint, PriceSeries};
pub use signal::{SignalKind, SignalOutput};
