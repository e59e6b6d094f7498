//! Weighted scoring of SMA, RSI, MACD and volume into one trading signal.

use crate::services::signals::indicators::{
    support_resistance, volatility, Macd, Rsi, Sma, VolumeAnalysis,
};
use crate::types::{
    Computed, MacdValue, PriceSeries, ScoreAnalysis, ScoreBreakdown, ScoreResult, Signal,
    TechnicalSnapshot, VolumeClass, VolumeLabel,
};
use tracing::debug;

/// Minimum series length for a full score.
pub const MIN_POINTS: usize = 50;

/// Total score at or beyond which a Buy/Sell is issued.
const DECISION_THRESHOLD: f64 = 3.0;
/// Highest reachable |score|: SMA 1 + RSI 2 + MACD 2 + volume 1.
const MAX_SCORE: f64 = 6.0;

/// Combines indicator readings into a directional score and a discrete signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalScorer {
    sma_fast: Sma,
    sma_slow: Sma,
    rsi: Rsi,
    macd: Macd,
    volume: VolumeAnalysis,
}

impl Default for SignalScorer {
    fn default() -> Self {
        Self::new(Rsi::default(), VolumeAnalysis::default())
    }
}

impl SignalScorer {
    pub fn new(rsi: Rsi, volume: VolumeAnalysis) -> Self {
        Self {
            sma_fast: Sma::new(20),
            sma_slow: Sma::new(50),
            rsi,
            macd: Macd::default(),
            volume,
        }
    }

    /// Gather every reading the score needs.
    pub fn snapshot(&self, series: &PriceSeries) -> Computed<TechnicalSnapshot> {
        let closes = series.closes();
        if closes.len() < MIN_POINTS {
            return Computed::insufficient(MIN_POINTS, closes.len());
        }

        let (Some(sma20), Some(sma50)) = (
            self.sma_fast.calculate(closes).value(),
            self.sma_slow.calculate(closes).value(),
        ) else {
            return Computed::insufficient(self.sma_slow.period(), closes.len());
        };

        Computed::ready(TechnicalSnapshot {
            price: series.last_close(),
            sma20,
            sma50,
            rsi_period: self.rsi.period(),
            rsi: self.rsi.calculate(closes),
            macd: self.macd.calculate(closes),
            volume: self.volume_reading(series),
            volatility: volatility(closes),
            levels: support_resistance(series.window(support_resistance::LOOKBACK)).value(),
        })
    }

    /// Volume label for the newest bar. A newest bar without volume reads Normal.
    fn volume_reading(&self, series: &PriceSeries) -> VolumeLabel {
        match series.points().last().and_then(|p| p.volume) {
            Some(_) => self.volume.calculate(&series.volumes()),
            None => VolumeLabel::normal(),
        }
    }

    /// Score a series. Short series get the neutral "insufficient data" result.
    pub fn score(&self, series: &PriceSeries) -> ScoreResult {
        match self.snapshot(series) {
            Computed::Ready { value } => Self::score_snapshot(&value),
            Computed::InsufficientData {
                required,
                available,
            } => {
                debug!(
                    "Skipping signal score: {} points available, {} required",
                    available, required
                );
                ScoreResult::insufficient_data()
            }
        }
    }

    /// Score a set of readings.
    pub fn score_snapshot(snapshot: &TechnicalSnapshot) -> ScoreResult {
        let (sma_signal, sma_text) = sma_term(snapshot.sma20, snapshot.sma50);
        let (rsi_signal, rsi_text) = rsi_term(snapshot.rsi);
        let (macd_signal, macd_text) = macd_term(&snapshot.macd);

        let mut total = sma_signal + rsi_signal + macd_signal;
        let volume_adjustment = if total > 0.0 {
            snapshot.volume.weight
        } else if total < 0.0 {
            -snapshot.volume.weight
        } else {
            0.0
        };
        total += volume_adjustment;

        let signal = if total >= DECISION_THRESHOLD {
            Signal::Buy
        } else if total <= -DECISION_THRESHOLD {
            Signal::Sell
        } else {
            Signal::Hold
        };
        let confidence = confidence(signal, total);

        debug!(
            "Scored {:?} (total {:.2}, confidence {:.1}): sma={} rsi={} macd={} volume={:+}",
            signal, total, confidence, sma_signal, rsi_signal, macd_signal, volume_adjustment
        );

        ScoreResult {
            signal,
            confidence,
            analysis: ScoreAnalysis {
                sma: sma_text,
                rsi: rsi_text,
                macd: macd_text,
                volume: volume_text(&snapshot.volume),
            },
            breakdown: Some(ScoreBreakdown {
                sma_signal,
                rsi_signal,
                macd_signal,
                volume_label: snapshot.volume.classification,
                volume_adjustment,
                total_score: total,
                signal,
                confidence,
            }),
        }
    }
}

fn sma_term(sma20: f64, sma50: f64) -> (f64, String) {
    if sma20 > sma50 * 1.005 {
        (1.0, "Bullish Crossover (SMA20 > SMA50)".to_string())
    } else if sma20 < sma50 * 0.995 {
        (-1.0, "Bearish Crossover (SMA20 < SMA50)".to_string())
    } else {
        (0.0, "Neutral (SMA20 near SMA50)".to_string())
    }
}

fn rsi_term(rsi: f64) -> (f64, String) {
    if rsi < 30.0 {
        (2.0, format!("Oversold (RSI {:.1})", rsi))
    } else if rsi < 40.0 {
        (1.0, format!("Approaching Oversold (RSI {:.1})", rsi))
    } else if rsi > 70.0 {
        (-2.0, format!("Overbought (RSI {:.1})", rsi))
    } else if rsi > 60.0 {
        (-1.0, format!("Approaching Overbought (RSI {:.1})", rsi))
    } else {
        (0.0, format!("Neutral (RSI {:.1})", rsi))
    }
}

fn macd_term(macd: &MacdValue) -> (f64, String) {
    if macd.bullish_crossover() {
        (2.0, "Bullish Crossover (histogram turned positive)".to_string())
    } else if macd.bearish_crossover() {
        (-2.0, "Bearish Crossover (histogram turned negative)".to_string())
    } else if macd.histogram > 0.0 && macd.macd_line > macd.signal_line {
        (1.0, "Bullish Momentum (MACD above signal)".to_string())
    } else if macd.histogram < 0.0 && macd.macd_line < macd.signal_line {
        (-1.0, "Bearish Momentum (MACD below signal)".to_string())
    } else {
        (0.0, "Neutral".to_string())
    }
}

fn volume_text(volume: &VolumeLabel) -> String {
    let base = match volume.classification {
        VolumeClass::High => "High Volume (confirms trend)",
        VolumeClass::Low => "Low Volume (weak conviction)",
        VolumeClass::Normal => "Normal Volume",
    };
    match volume.ratio {
        Some(ratio) => format!("{} - {:.2}x average", base, ratio),
        None => base.to_string(),
    }
}

/// Buy/Sell confidence grows with the score beyond the threshold; Hold confidence grows
/// as the score approaches zero.
fn confidence(signal: Signal, total: f64) -> f64 {
    let value = match signal {
        Signal::Buy | Signal::Sell => {
            75.0 + (total.abs() - DECISION_THRESHOLD) / (MAX_SCORE - DECISION_THRESHOLD) * 25.0
        }
        Signal::Hold => 70.0 - (total.abs() / DECISION_THRESHOLD) * 20.0,
    };
    value.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(
        sma20: f64,
        sma50: f64,
        rsi: f64,
        macd: MacdValue,
        volume: VolumeClass,
    ) -> TechnicalSnapshot {
        TechnicalSnapshot {
            price: 100.0,
            sma20,
            sma50,
            rsi_period: 14,
            rsi,
            macd,
            volume: VolumeLabel::new(volume, None),
            volatility: 0.01,
            levels: None,
        }
    }

    fn macd(histogram: f64, previous_histogram: f64) -> MacdValue {
        MacdValue {
            macd_line: histogram,
            signal_line: 0.0,
            histogram,
            previous_histogram,
        }
    }

    #[test]
    fn test_sma_term_thresholds() {
        assert_eq!(sma_term(101.0, 100.0).0, 1.0);
        assert_eq!(sma_term(99.0, 100.0).0, -1.0);
        assert_eq!(sma_term(100.4, 100.0).0, 0.0);
        assert_eq!(sma_term(99.6, 100.0).0, 0.0);
    }

    #[test]
    fn test_rsi_term_bands() {
        assert_eq!(rsi_term(25.0).0, 2.0);
        assert_eq!(rsi_term(30.0).0, 1.0);
        assert_eq!(rsi_term(39.9).0, 1.0);
        assert_eq!(rsi_term(40.0).0, 0.0);
        assert_eq!(rsi_term(60.0).0, 0.0);
        assert_eq!(rsi_term(65.0).0, -1.0);
        assert_eq!(rsi_term(70.0).0, -1.0);
        assert_eq!(rsi_term(70.1).0, -2.0);
    }

    #[test]
    fn test_macd_term_states() {
        assert_eq!(macd_term(&macd(0.5, -0.2)).0, 2.0);
        assert_eq!(macd_term(&macd(0.5, 0.0)).0, 2.0);
        assert_eq!(macd_term(&macd(-0.5, 0.2)).0, -2.0);
        assert_eq!(macd_term(&macd(0.5, 0.3)).0, 1.0);
        assert_eq!(macd_term(&macd(-0.5, -0.3)).0, -1.0);
        assert_eq!(macd_term(&MacdValue::ZERO).0, 0.0);
    }

    #[test]
    fn test_strong_buy_confidence_is_100() {
        let result = SignalScorer::score_snapshot(&snapshot(
            110.0,
            100.0,
            25.0,
            macd(0.5, -0.1),
            VolumeClass::High,
        ));
        assert_eq!(result.signal, Signal::Buy);
        assert_eq!(result.confidence, 100.0);
        assert_eq!(result.breakdown.unwrap().total_score, 6.0);
    }

    #[test]
    fn test_low_volume_dampens_sell() {
        // -1 - 2 + 0 = -3, low volume pulls it to -2.5
        let result = SignalScorer::score_snapshot(&snapshot(
            90.0,
            100.0,
            75.0,
            MacdValue::ZERO,
            VolumeClass::Low,
        ));
        let breakdown = result.breakdown.unwrap();
        assert_eq!(breakdown.volume_adjustment, 0.5);
        assert_eq!(breakdown.total_score, -2.5);
        assert_eq!(result.signal, Signal::Hold);
    }

    #[test]
    fn test_high_volume_amplifies_sell() {
        let result = SignalScorer::score_snapshot(&snapshot(
            90.0,
            100.0,
            75.0,
            MacdValue::ZERO,
            VolumeClass::High,
        ));
        assert_eq!(result.signal, Signal::Sell);
        assert!((result.confidence - (75.0 + 25.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_volume_ignored_at_zero_score() {
        let result = SignalScorer::score_snapshot(&snapshot(
            100.0,
            100.0,
            50.0,
            MacdValue::ZERO,
            VolumeClass::High,
        ));
        assert_eq!(result.signal, Signal::Hold);
        assert_eq!(result.confidence, 70.0);
        assert_eq!(result.breakdown.unwrap().volume_adjustment, 0.0);
    }

    #[test]
    fn test_hold_confidence_falls_with_score() {
        assert_eq!(confidence(Signal::Hold, 0.0), 70.0);
        assert!((confidence(Signal::Hold, 1.5) - 60.0).abs() < 1e-9);
        assert!((confidence(Signal::Hold, -2.5) - (70.0 - 2.5 / 3.0 * 20.0)).abs() < 1e-9);
    }
}
