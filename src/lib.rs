//! Pricecast - technical-indicator scoring and regression forecasts over price series
//!
//! Every entry point is a pure function of an in-memory [`PriceSeries`]; nothing here
//! performs I/O or keeps state between calls.

pub mod config;
pub mod error;
pub mod services;
pub mod types;

pub use error::{EngineError, Result};
pub use services::{analyze_trend, ForecastEngine, LinearRegression, SignalScorer};
pub use types::*;
