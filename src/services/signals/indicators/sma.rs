//! Simple Moving Average (SMA) indicator.

use crate::types::Computed;

/// SMA (Simple Moving Average) indicator.
///
/// Arithmetic mean of the last `period` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Mean of the trailing window, or `InsufficientData` when the series is shorter
    /// than the period. A zero period never has a window to average.
    pub fn calculate(&self, values: &[f64]) -> Computed<f64> {
        let period = self.period;
        if period == 0 || values.len() < period {
            return Computed::insufficient(period, values.len());
        }

        let window = &values[values.len() - period..];
        Computed::ready(window.iter().sum::<f64>() / period as f64)
    }
}
