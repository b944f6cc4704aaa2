//! Error taxonomy for the advisory pipeline.
//!
//! Only precondition violations and collaborator failures surface as
//! errors. Insufficient history is not an error anywhere: it flows
//! through the data model as `None` indicator values.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// A price series that violates the engine preconditions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error("price series is empty")]
    Empty,

    #[error("timestamps are not strictly increasing at {at}")]
    NonMonotonic { at: DateTime<Utc> },

    #[error("more than one price point on {day}")]
    DuplicateDay { day: NaiveDate },
}

/// Invalid environment configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    #[error("{var} must be non-negative, got {value}")]
    NegativeValue { var: &'static str, value: f64 },
}

/// Failures while fetching or decoding upstream market data.
#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("market data request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("market data provider returned HTTP {status}")]
    Status { status: u16 },

    #[error("malformed market data payload: {0}")]
    Payload(String),

    #[error("fetched series is unusable: {0}")]
    Series(#[from] SeriesError),
}
