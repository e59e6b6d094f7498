use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Projected price direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
}

/// Risk classification of a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify from volatility (as a fraction) and forecast horizon in days.
    pub fn classify(volatility: f64, days_ahead: u32) -> Self {
        let score = (volatility * 100.0 + days_ahead as f64 / 30.0) / 2.0;
        if score > 5.0 {
            RiskLevel::High
        } else if score > 3.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// One point of the synthetic projection path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub day: u32,
    pub price: f64,
    pub date: NaiveDate,
}

/// Multi-day price forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub current_price: f64,
    pub target_price: f64,
    pub direction: Direction,
    pub price_change: f64,
    pub price_change_percent: f64,
    /// Confidence in percent (50-95).
    pub confidence: f64,
    pub days: u32,
    pub trend_strength: f64,
    pub r_squared: f64,
    pub volatility: f64,
    pub risk_level: RiskLevel,
    pub prediction_path: Vec<PathPoint>,
}
