//! Coinsage: a single-asset technical-analysis advisor.
//!
//! Fetches daily close history from a market data provider, annotates it
//! with SMA-50/200, RSI-14 and MACD columns, and classifies the latest
//! observation into one of four advisory signals with a human-readable
//! rationale. Stateless: every invocation fetches, computes, classifies
//! and discards.

pub mod config;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;
pub mod signals;
