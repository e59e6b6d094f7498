pub mod forecast;
pub mod signals;

pub use forecast::{ForecastEngine, LinearRegression};
pub use signals::{analyze_trend, SignalScorer};
