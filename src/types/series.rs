use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single historical price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// Unix timestamp (milliseconds).
    pub timestamp: i64,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
}

impl HistoricalPoint {
    /// Create a close-only point.
    pub fn new(timestamp: i64, close: f64) -> Self {
        Self {
            timestamp,
            close,
            volume: None,
            high: None,
            low: None,
        }
    }

    /// Attach a traded volume.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Attach the period's high and low.
    pub fn with_range(mut self, high: f64, low: f64) -> Self {
        self.high = Some(high);
        self.low = Some(low);
        self
    }

    /// High of the period, falling back to the close.
    pub fn high_or_close(&self) -> f64 {
        self.high.unwrap_or(self.close)
    }

    /// Low of the period, falling back to the close.
    pub fn low_or_close(&self) -> f64 {
        self.low.unwrap_or(self.close)
    }
}

/// A validated, immutable price series ordered ascending by timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    points: Vec<HistoricalPoint>,
    closes: Vec<f64>,
}

impl PriceSeries {
    /// Validate caller-supplied points.
    ///
    /// Rejects empty input, non-finite numeric fields and timestamps that are not
    /// strictly ascending.
    pub fn new(points: Vec<HistoricalPoint>) -> Result<Self> {
        if let Err(e) = Self::validate(&points) {
            debug!("Rejected price series of {} points: {}", points.len(), e);
            return Err(e);
        }

        let closes = points.iter().map(|p| p.close).collect();
        Ok(Self { points, closes })
    }

    fn validate(points: &[HistoricalPoint]) -> Result<()> {
        if points.is_empty() {
            return Err(EngineError::EmptySeries);
        }

        for (index, point) in points.iter().enumerate() {
            if !point.close.is_finite() {
                return Err(EngineError::NonFinite {
                    field: "close",
                    index,
                });
            }
            let optional = [
                ("volume", point.volume),
                ("high", point.high),
                ("low", point.low),
            ];
            for (field, value) in optional {
                if matches!(value, Some(v) if !v.is_finite()) {
                    return Err(EngineError::NonFinite { field, index });
                }
            }
            if index > 0 && point.timestamp <= points[index - 1].timestamp {
                return Err(EngineError::NonMonotonic { index });
            }
        }

        Ok(())
    }

    pub fn points(&self) -> &[HistoricalPoint] {
        &self.points
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// Volumes of the points that carry one, in order.
    pub fn volumes(&self) -> Vec<f64> {
        self.points.iter().filter_map(|p| p.volume).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent close. Always present since the series is non-empty.
    pub fn last_close(&self) -> f64 {
        self.closes[self.closes.len() - 1]
    }

    /// The last `n` points (or all of them when the series is shorter).
    pub fn window(&self, n: usize) -> &[HistoricalPoint] {
        let start = self.points.len().saturating_sub(n);
        &self.points[start..]
    }
}

/// Outcome of a computation that needs a minimum amount of data.
///
/// Keeps "not enough data" distinct from a legitimately computed zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Computed<T> {
    Ready { value: T },
    InsufficientData { required: usize, available: usize },
}

impl<T> Computed<T> {
    pub fn ready(value: T) -> Self {
        Computed::Ready { value }
    }

    pub fn insufficient(required: usize, available: usize) -> Self {
        Computed::InsufficientData {
            required,
            available,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Computed::Ready { .. })
    }

    /// The computed value, if there was enough data.
    pub fn value(self) -> Option<T> {
        match self {
            Computed::Ready { value } => Some(value),
            Computed::InsufficientData { .. } => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Computed<U> {
        match self {
            Computed::Ready { value } => Computed::Ready { value: f(value) },
            Computed::InsufficientData {
                required,
                available,
            } => Computed::InsufficientData {
                required,
                available,
            },
        }
    }
}
