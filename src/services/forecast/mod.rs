//! Price forecasting: least-squares trend projection with confidence and risk.

pub mod engine;
pub mod regression;

pub use engine::ForecastEngine;
pub use regression::LinearRegression;
