//! Trading signals service module.
//!
//! Provides technical indicator calculations, composite scoring of those indicators
//! into a Buy/Sell/Hold signal, and a qualitative trend summary.

pub mod indicators;
pub mod scorer;
pub mod trend;

pub use scorer::{SignalScorer, MIN_POINTS};
pub use trend::analyze_trend;
