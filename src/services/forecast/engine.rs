//! Regression-based price forecast with a synthetic chart path.

use super::LinearRegression;
use crate::error::{EngineError, Result};
use crate::services::signals::indicators::volatility;
use crate::types::{Direction, ForecastResult, PathPoint, PriceSeries, RiskLevel};
use chrono::{Days, NaiveDate, Utc};
use rand::Rng;
use tracing::{debug, warn};

/// Confidence bounds in percent.
const MIN_CONFIDENCE: f64 = 50.0;
const MAX_CONFIDENCE: f64 = 95.0;
/// Largest volatility penalty applied to confidence, in percentage points.
const MAX_VOLATILITY_PENALTY: f64 = 30.0;
/// Widest noise band the sampler can span without its range overflowing.
const MAX_NOISE_AMPLITUDE: f64 = f64::MAX / 4.0;

/// Projects a price `days_ahead` days past the end of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastEngine {
    days_ahead: u32,
    start_date: Option<NaiveDate>,
}

impl ForecastEngine {
    /// Create an engine for a horizon of at least one day.
    pub fn new(days_ahead: u32) -> Result<Self> {
        if days_ahead == 0 {
            return Err(EngineError::InvalidParameter(
                "days_ahead must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            days_ahead,
            start_date: None,
        })
    }

    /// Date of path day 0. Defaults to today (UTC).
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn days_ahead(&self) -> u32 {
        self.days_ahead
    }

    /// Forecast the series.
    ///
    /// `rng` only drives the cosmetic noise on `prediction_path`; every other field is a
    /// deterministic function of the series.
    pub fn forecast<R: Rng + ?Sized>(
        &self,
        series: &PriceSeries,
        rng: &mut R,
    ) -> Result<ForecastResult> {
        let closes = series.closes();
        let current_price = series.last_close();
        let volatility = finite("volatility", volatility(closes))?;

        let fit = if closes.len() < 2 {
            debug!("Single-point series, projecting flat from {}", current_price);
            LinearRegression {
                intercept: current_price,
                slope: 0.0,
                r_squared: 0.0,
            }
        } else {
            LinearRegression::fit_indexed(closes).map_err(|e| {
                warn!("Forecast regression failed: {}", e);
                e
            })?
        };

        let x = (closes.len() + self.days_ahead as usize - 1) as f64;
        let target_price = finite("target price", fit.predict(x))?;
        let direction = if target_price > current_price {
            Direction::Up
        } else {
            Direction::Down
        };

        let price_change = finite("price change", target_price - current_price)?;
        let price_change_percent = if current_price != 0.0 {
            finite("price change percent", price_change / current_price * 100.0)?
        } else {
            0.0
        };
        let confidence = (fit.r_squared * 100.0
            - (volatility * 100.0).min(MAX_VOLATILITY_PENALTY))
        .clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);
        let trend_strength = if current_price != 0.0 {
            finite("trend strength", fit.slope.abs() / current_price.abs() * 100.0)?
        } else {
            0.0
        };
        let risk_level = RiskLevel::classify(volatility, self.days_ahead);

        let prediction_path =
            self.prediction_path(current_price, target_price, volatility, rng)?;

        debug!(
            "Forecast {} days: {:.4} -> {:.4} ({:?}, r2 {:.3}, confidence {:.1}, risk {:?})",
            self.days_ahead,
            current_price,
            target_price,
            direction,
            fit.r_squared,
            confidence,
            risk_level
        );

        Ok(ForecastResult {
            current_price,
            target_price,
            direction,
            price_change,
            price_change_percent,
            confidence,
            days: self.days_ahead,
            trend_strength,
            r_squared: fit.r_squared,
            volatility,
            risk_level,
            prediction_path,
        })
    }

    /// Straight line from the current to the target price with uniform noise of
    /// amplitude `current_price * volatility` on every day, day 0 included. A band too
    /// wide to sample leaves the path noiseless.
    fn prediction_path<R: Rng + ?Sized>(
        &self,
        current_price: f64,
        target_price: f64,
        volatility: f64,
        rng: &mut R,
    ) -> Result<Vec<PathPoint>> {
        let start = self
            .start_date
            .unwrap_or_else(|| Utc::now().date_naive());
        let amplitude = (current_price * volatility).abs();
        let days = self.days_ahead as f64;

        (0..=self.days_ahead)
            .map(|day| -> Result<PathPoint> {
                let base = current_price + (target_price - current_price) * (day as f64 / days);
                let noise = if amplitude > 0.0 && amplitude <= MAX_NOISE_AMPLITUDE {
                    rng.gen_range(-amplitude..=amplitude)
                } else {
                    0.0
                };
                let price = base + noise;
                let date = start
                    .checked_add_days(Days::new(day as u64))
                    .ok_or_else(|| {
                        EngineError::Computation(format!("path date overflow at day {}", day))
                    })?;
                Ok(PathPoint {
                    day,
                    price: if price.is_finite() { price } else { base },
                    date,
                })
            })
            .collect()
    }
}

/// Reject a derived figure that left the f64 range.
fn finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        warn!("Forecast {} is not finite: {}", name, value);
        Err(EngineError::Computation(format!(
            "{} overflowed f64 range",
            name
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HistoricalPoint;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn series(closes: &[f64]) -> PriceSeries {
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, c)| HistoricalPoint::new(i as i64 * 86_400_000, *c))
            .collect();
        PriceSeries::new(points).unwrap()
    }

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_zero_days_rejected() {
        let err = ForecastEngine::new(0).unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));
    }

    #[test]
    fn test_single_point_projects_flat() {
        let engine = ForecastEngine::new(5).unwrap().with_start_date(start());
        let result = engine
            .forecast(&series(&[42.0]), &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(result.target_price, 42.0);
        assert_eq!(result.direction, Direction::Down);
        assert_eq!(result.confidence, MIN_CONFIDENCE);
        assert_eq!(result.prediction_path.len(), 6);
        assert!(result.prediction_path.iter().all(|p| p.price == 42.0));
    }

    #[test]
    fn test_path_dates_and_endpoints_without_noise() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let engine = ForecastEngine::new(3).unwrap().with_start_date(start());
        let mut rng = StdRng::seed_from_u64(7);
        let path = engine
            .prediction_path(100.0, 130.0, 0.0, &mut rng)
            .unwrap();

        assert_eq!(path.len(), 4);
        assert_eq!(path[0].price, 100.0);
        assert_eq!(path[3].price, 130.0);
        assert_eq!(path[3].date, NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
        assert!(engine.forecast(&series(&closes), &mut rng).is_ok());
    }

    #[test]
    fn test_overflowing_volatility_is_computation_error() {
        let engine = ForecastEngine::new(3).unwrap().with_start_date(start());
        let err = engine
            .forecast(&series(&[1.0, 1e308, 1e308]), &mut StdRng::seed_from_u64(1))
            .unwrap_err();
        assert!(matches!(err, EngineError::Computation(_)));
    }

    #[test]
    fn test_overflowing_amplitude_draws_no_noise() {
        let engine = ForecastEngine::new(2).unwrap().with_start_date(start());
        let mut rng = StdRng::seed_from_u64(1);
        for volatility in [10.0, 1.0] {
            let path = engine
                .prediction_path(1e308, 1e308, volatility, &mut rng)
                .unwrap();
            assert!(path.iter().all(|p| p.price == 1e308));
        }
    }

    #[test]
    fn test_noise_bounded_by_volatility() {
        let engine = ForecastEngine::new(10).unwrap().with_start_date(start());
        let mut rng = StdRng::seed_from_u64(99);
        let path = engine.prediction_path(100.0, 110.0, 0.02, &mut rng).unwrap();
        for point in &path {
            let base = 100.0 + 10.0 * (point.day as f64 / 10.0);
            assert!((point.price - base).abs() <= 2.0 + 1e-9);
        }
    }
}
