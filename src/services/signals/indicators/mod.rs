//! Technical indicator implementations.
//!
//! Every indicator is a small value type holding its parameters; `calculate` is a pure
//! function of the input slice.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod support_resistance;
pub mod volatility;
pub mod volume;

pub use ema::Ema;
pub use macd::Macd;
pub use rsi::{Rsi, NEUTRAL_RSI};
pub use sma::Sma;
pub use support_resistance::support_resistance;
pub use volatility::volatility;
pub use volume::VolumeAnalysis;
