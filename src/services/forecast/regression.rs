//! Ordinary least squares fit of `y = a + b·x`.

use crate::error::{EngineError, Result};

/// A fitted straight line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRegression {
    pub intercept: f64,
    pub slope: f64,
    /// Coefficient of determination in [0, 1].
    pub r_squared: f64,
}

impl LinearRegression {
    /// Fit paired samples.
    ///
    /// Fails when the inputs differ in length, hold fewer than two samples, or all `x`
    /// are identical (slope undefined).
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(EngineError::Computation(format!(
                "regression inputs differ in length ({} vs {})",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(EngineError::Computation(format!(
                "regression needs at least 2 samples, got {}",
                xs.len()
            )));
        }

        let n = xs.len() as f64;
        let mean_x = xs.iter().sum::<f64>() / n;
        let mean_y = ys.iter().sum::<f64>() / n;

        let (sxy, sxx) = xs.iter().zip(ys).fold((0.0, 0.0), |(sxy, sxx), (x, y)| {
            let dx = x - mean_x;
            (sxy + dx * (y - mean_y), sxx + dx * dx)
        });

        if sxx == 0.0 {
            return Err(EngineError::Computation(
                "regression x values are all identical".to_string(),
            ));
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;
        if !slope.is_finite() || !intercept.is_finite() {
            return Err(EngineError::Computation(
                "regression overflowed f64 range".to_string(),
            ));
        }

        let ss_tot: f64 = ys.iter().map(|y| (y - mean_y).powi(2)).sum();
        let ss_res: f64 = xs
            .iter()
            .zip(ys)
            .map(|(x, y)| (y - (intercept + slope * x)).powi(2))
            .sum();
        let unexplained = ss_res / ss_tot;
        let r_squared = if ss_tot == 0.0 || !unexplained.is_finite() {
            0.0
        } else {
            (1.0 - unexplained).clamp(0.0, 1.0)
        };

        Ok(Self {
            intercept,
            slope,
            r_squared,
        })
    }

    /// Fit values against their index `0..n`.
    pub fn fit_indexed(values: &[f64]) -> Result<Self> {
        let xs: Vec<f64> = (0..values.len()).map(|i| i as f64).collect();
        Self::fit(&xs, values)
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}
