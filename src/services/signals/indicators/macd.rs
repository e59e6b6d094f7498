//! MACD (Moving Average Convergence Divergence) indicator.

use super::Ema;
use crate::types::MacdValue;

/// MACD indicator.
///
/// Shows the relationship between two EMAs:
/// - MACD Line = EMA(12) - EMA(26)
/// - Signal Line = EMA(9) of MACD Line
/// - Histogram = MACD Line - Signal Line
///
/// Buy signal: histogram turns positive
/// Sell signal: histogram turns negative
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast_period,
            slow_period,
            signal_period,
        }
    }

    /// Minimum series length for a non-sentinel result.
    pub fn min_periods(&self) -> usize {
        self.slow_period + self.signal_period
    }

    /// MACD state at the last point, or [`MacdValue::ZERO`] when the series is too short.
    pub fn calculate(&self, closes: &[f64]) -> MacdValue {
        if closes.len() < self.min_periods() {
            return MacdValue::ZERO;
        }

        let fast_ema = Ema::new(self.fast_period).calculate(closes);
        let slow_ema = Ema::new(self.slow_period).calculate(closes);

        // Align the fast EMA with the slow one
        let offset = fast_ema.len().saturating_sub(slow_ema.len());
        let macd_line: Vec<f64> = fast_ema
            .iter()
            .skip(offset)
            .zip(slow_ema.iter())
            .map(|(f, s)| f - s)
            .collect();

        let signal_line = Ema::new(self.signal_period).calculate(&macd_line);
        let (Some(&macd), Some(&signal)) = (macd_line.last(), signal_line.last()) else {
            return MacdValue::ZERO;
        };
        let histogram = macd - signal;

        // Signal line tracks the MACD line index for index
        let previous_histogram = match (
            macd_line.len().checked_sub(2).map(|i| macd_line[i]),
            signal_line.len().checked_sub(2).map(|i| signal_line[i]),
        ) {
            (Some(prev_macd), Some(prev_signal)) => prev_macd - prev_signal,
            _ => histogram,
        };

        MacdValue {
            macd_line: macd,
            signal_line: signal,
            histogram,
            previous_histogram,
        }
    }
}
