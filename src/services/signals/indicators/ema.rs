//! Exponential Moving Average (EMA) indicator.

/// EMA (Exponential Moving Average) indicator.
///
/// Like SMA but gives more weight to recent prices. The first value seeds the
/// recurrence, so the output has one entry per input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ema {
    period: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Smoothing factor `2 / (period + 1)`.
    pub fn multiplier(&self) -> f64 {
        2.0 / (self.period as f64 + 1.0)
    }

    /// Full EMA sequence, empty when the series is shorter than the period.
    pub fn calculate(&self, values: &[f64]) -> Vec<f64> {
        if self.period == 0 || values.len() < self.period {
            return Vec::new();
        }

        let k = self.multiplier();
        let mut ema = Vec::with_capacity(values.len());
        let mut prev = values[0];
        ema.push(prev);

        for value in &values[1..] {
            prev = value * k + prev * (1.0 - k);
            ema.push(prev);
        }

        ema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ema_seeds_with_first_value() {
        let ema = Ema::new(3).calculate(&[10.0, 11.0, 12.0, 13.0]);
        assert_eq!(ema.len(), 4);
        assert_eq!(ema[0], 10.0);
    }

    #[test]
    fn test_ema_recurrence() {
        // k = 0.5 for period 3
        let ema = Ema::new(3).calculate(&[10.0, 20.0, 20.0]);
        assert_eq!(ema, vec![10.0, 15.0, 17.5]);
    }

    #[test]
    fn test_ema_short_series_is_empty() {
        assert!(Ema::new(12).calculate(&[1.0; 11]).is_empty());
        assert!(Ema::new(0).calculate(&[1.0; 5]).is_empty());
    }
}
