//! Relative Strength Index (RSI) indicator.

/// RSI value reported when there are not enough deltas to measure momentum.
pub const NEUTRAL_RSI: f64 = 50.0;

/// RSI (Relative Strength Index) indicator.
///
/// Measures momentum by comparing the magnitude of recent gains to recent losses.
/// Values range from 0-100:
/// - Below 30: Oversold (potential buy signal)
/// - Above 70: Overbought (potential sell signal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Wilder-smoothed RSI of the whole series.
    ///
    /// Returns [`NEUTRAL_RSI`] when the series has no more than `period` values.
    pub fn calculate(&self, values: &[f64]) -> f64 {
        let period = self.period;
        if period == 0 || values.len() <= period {
            return NEUTRAL_RSI;
        }

        let (gains, losses): (Vec<f64>, Vec<f64>) = values
            .windows(2)
            .map(|w| {
                let change = w[1] - w[0];
                if change > 0.0 {
                    (change, 0.0)
                } else {
                    (0.0, -change)
                }
            })
            .unzip();

        let mut avg_gain = gains.iter().take(period).sum::<f64>() / period as f64;
        let mut avg_loss = losses.iter().take(period).sum::<f64>() / period as f64;

        for i in period..gains.len() {
            avg_gain = (avg_gain * (period - 1) as f64 + gains[i]) / period as f64;
            avg_loss = (avg_loss * (period - 1) as f64 + losses[i]) / period as f64;
        }

        // Deltas between closes near f64::MAX overflow to infinity
        match (avg_gain.is_infinite(), avg_loss.is_infinite()) {
            (true, true) => return NEUTRAL_RSI,
            (true, false) => return 100.0,
            (false, true) => return 0.0,
            (false, false) => {}
        }

        if avg_loss == 0.0 {
            // No movement at all is neutral, not overbought
            return if avg_gain == 0.0 { NEUTRAL_RSI } else { 100.0 };
        }

        let rs = avg_gain / avg_loss;
        let value = 100.0 - (100.0 / (1.0 + rs));
        if value.is_nan() {
            return NEUTRAL_RSI;
        }
        value.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uptrend(count: usize) -> Vec<f64> {
        (0..count).map(|i| 100.0 + i as f64 * 1.5).collect()
    }

    fn downtrend(count: usize) -> Vec<f64> {
        (0..count).map(|i| 200.0 - i as f64 * 1.5).collect()
    }

    fn zigzag(count: usize) -> Vec<f64> {
        (0..count)
            .map(|i| 100.0 + i as f64 * 0.2 + if i % 2 == 0 { 1.0 } else { -1.0 })
            .collect()
    }

    #[test]
    fn test_rsi_default_period() {
        assert_eq!(Rsi::default().period(), 14);
    }

    #[test]
    fn test_rsi_insufficient_data_is_neutral() {
        let rsi = Rsi::default();
        assert_eq!(rsi.calculate(&uptrend(10)), NEUTRAL_RSI);
        assert_eq!(rsi.calculate(&uptrend(14)), NEUTRAL_RSI);
        assert_eq!(rsi.calculate(&[]), NEUTRAL_RSI);
    }

    #[test]
    fn test_rsi_uptrend_without_losses_is_100() {
        assert_eq!(Rsi::default().calculate(&uptrend(50)), 100.0);
    }

    #[test]
    fn test_rsi_downtrend_low_value() {
        let value = Rsi::default().calculate(&downtrend(50));
        assert!(value < 50.0, "RSI in downtrend should be < 50, got {}", value);
        assert!(value >= 0.0);
    }

    #[test]
    fn test_rsi_flat_series_is_neutral() {
        assert_eq!(Rsi::default().calculate(&[100.0; 30]), NEUTRAL_RSI);
    }

    #[test]
    fn test_rsi_mixed_series_in_range() {
        let value = Rsi::default().calculate(&zigzag(60));
        assert!(value > 0.0 && value < 100.0, "got {}", value);
    }

    #[test]
    fn test_rsi_overflowing_deltas_stay_bounded() {
        let swings: Vec<f64> = (0..20)
            .map(|i| if i % 2 == 0 { 1.7e308 } else { -1.7e308 })
            .collect();
        assert_eq!(Rsi::default().calculate(&swings), NEUTRAL_RSI);

        // Only the final jump overflows, and it is a gain
        let mut spike = vec![-1.7e308; 15];
        spike.push(1.7e308);
        assert_eq!(Rsi::default().calculate(&spike), 100.0);

        let mut crash = vec![1.7e308; 15];
        crash.push(-1.7e308);
        assert_eq!(Rsi::default().calculate(&crash), 0.0);
    }

    #[test]
    fn test_rsi_custom_period() {
        let rsi = Rsi::new(7);
        assert_eq!(rsi.calculate(&uptrend(7)), NEUTRAL_RSI);
        assert_eq!(rsi.calculate(&uptrend(8)), 100.0);
    }
}
