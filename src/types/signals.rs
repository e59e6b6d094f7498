use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Text used for every sub-indicator when the series is too short to score.
pub const INSUFFICIENT_DATA: &str = "insufficient data";

/// Discrete trading signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            Signal::Buy => "Buy",
            Signal::Sell => "Sell",
            Signal::Hold => "Hold",
        }
    }

    /// Signal implied by the sign of an indicator contribution.
    pub fn from_contribution(value: f64) -> Self {
        if value > 0.0 {
            Signal::Buy
        } else if value < 0.0 {
            Signal::Sell
        } else {
            Signal::Hold
        }
    }
}

/// MACD state at the last point of a series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacdValue {
    pub macd_line: f64,
    pub signal_line: f64,
    pub histogram: f64,
    /// Histogram one index back, used for crossover detection.
    pub previous_histogram: f64,
}

impl MacdValue {
    /// The all-zero result returned when the series is too short.
    pub const ZERO: MacdValue = MacdValue {
        macd_line: 0.0,
        signal_line: 0.0,
        histogram: 0.0,
        previous_histogram: 0.0,
    };

    /// Histogram turned positive on the last point.
    pub fn bullish_crossover(&self) -> bool {
        self.previous_histogram <= 0.0 && self.histogram > 0.0
    }

    /// Histogram turned negative on the last point.
    pub fn bearish_crossover(&self) -> bool {
        self.previous_histogram >= 0.0 && self.histogram < 0.0
    }
}

/// Volume classification relative to its moving average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeClass {
    High,
    Low,
    Normal,
}

impl VolumeClass {
    /// Weight applied to the running score.
    pub fn weight(&self) -> f64 {
        match self {
            VolumeClass::High => 1.0,
            VolumeClass::Low => -0.5,
            VolumeClass::Normal => 0.0,
        }
    }
}

/// Result of volume analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeLabel {
    pub classification: VolumeClass,
    pub weight: f64,
    /// Latest volume divided by its moving average, when that average is known and non-zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
}

impl VolumeLabel {
    pub fn new(classification: VolumeClass, ratio: Option<f64>) -> Self {
        Self {
            classification,
            weight: classification.weight(),
            ratio,
        }
    }

    /// Neutral label used when there is no usable volume history.
    pub fn normal() -> Self {
        Self::new(VolumeClass::Normal, None)
    }
}

/// Two-tier support and resistance levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportResistance {
    pub resistance1: f64,
    pub resistance2: f64,
    pub support1: f64,
    pub support2: f64,
}

/// A single indicator reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "indicator", rename_all = "snake_case")]
pub enum IndicatorResult {
    Sma { period: usize, value: f64 },
    Rsi { period: usize, value: f64 },
    Macd(MacdValue),
    Volume(VolumeLabel),
}

/// Per-indicator text explaining a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreAnalysis {
    pub sma: String,
    pub rsi: String,
    pub macd: String,
    pub volume: String,
}

impl ScoreAnalysis {
    /// Analysis with the same text for every indicator.
    pub fn uniform(text: &str) -> Self {
        Self {
            sma: text.to_string(),
            rsi: text.to_string(),
            macd: text.to_string(),
            volume: text.to_string(),
        }
    }
}

/// Numeric contributions that produced a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub sma_signal: f64,
    pub rsi_signal: f64,
    pub macd_signal: f64,
    pub volume_label: VolumeClass,
    /// Adjustment actually applied for volume (sign follows the running total).
    pub volume_adjustment: f64,
    pub total_score: f64,
    pub signal: Signal,
    pub confidence: f64,
}

impl ScoreBreakdown {
    /// Each scored sub-indicator as a discrete signal.
    pub fn signals(&self) -> BTreeMap<String, Signal> {
        let mut signals = BTreeMap::new();
        signals.insert("sma".to_string(), Signal::from_contribution(self.sma_signal));
        signals.insert("rsi".to_string(), Signal::from_contribution(self.rsi_signal));
        signals.insert("macd".to_string(), Signal::from_contribution(self.macd_signal));
        signals.insert(
            "volume".to_string(),
            Signal::from_contribution(self.volume_adjustment),
        );
        signals
    }
}

/// Scored trading signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub signal: Signal,
    /// Confidence in percent (0-100).
    pub confidence: f64,
    pub analysis: ScoreAnalysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

impl ScoreResult {
    /// Result returned when the series is too short to score.
    pub fn insufficient_data() -> Self {
        Self {
            signal: Signal::Hold,
            confidence: 50.0,
            analysis: ScoreAnalysis::uniform(INSUFFICIENT_DATA),
            breakdown: None,
        }
    }
}

/// Overall market sentiment across several indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

/// How decisively the indicators agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendStrength {
    Strong,
    Moderate,
    Weak,
}

impl TrendStrength {
    /// Classify an agreement ratio in [0, 1].
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > 0.6 {
            TrendStrength::Strong
        } else if ratio > 0.3 {
            TrendStrength::Moderate
        } else {
            TrendStrength::Weak
        }
    }
}

/// Qualitative summary of a set of indicator signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    pub sentiment: Sentiment,
    /// |bullish - bearish| / total, in [0, 1].
    pub strength: f64,
    pub strength_label: TrendStrength,
    pub bullish: usize,
    pub bearish: usize,
    pub neutral: usize,
}

/// All indicator readings needed to score a series, taken at its last point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSnapshot {
    pub price: f64,
    pub sma20: f64,
    pub sma50: f64,
    pub rsi_period: usize,
    pub rsi: f64,
    pub macd: MacdValue,
    pub volume: VolumeLabel,
    pub volatility: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<SupportResistance>,
}

impl TechnicalSnapshot {
    /// The scored indicators as tagged readings, for display.
    pub fn indicators(&self) -> Vec<IndicatorResult> {
        vec![
            IndicatorResult::Sma {
                period: 20,
                value: self.sma20,
            },
            IndicatorResult::Sma {
                period: 50,
                value: self.sma50,
            },
            IndicatorResult::Rsi {
                period: self.rsi_period,
                value: self.rsi,
            },
            IndicatorResult::Macd(self.macd),
            IndicatorResult::Volume(self.volume),
        ]
    }
}
