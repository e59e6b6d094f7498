//! Qualitative sentiment from a set of named indicator signals.

use crate::types::{Sentiment, Signal, TrendStrength, TrendSummary};
use std::collections::BTreeMap;

/// Summarize named signals into a sentiment and agreement strength.
///
/// An empty map is Neutral with zero strength.
pub fn analyze_trend(signals: &BTreeMap<String, Signal>) -> TrendSummary {
    let mut bullish = 0;
    let mut bearish = 0;
    let mut neutral = 0;
    for signal in signals.values() {
        match signal {
            Signal::Buy => bullish += 1,
            Signal::Sell => bearish += 1,
            Signal::Hold => neutral += 1,
        }
    }

    let sentiment = if bullish > bearish {
        Sentiment::Bullish
    } else if bearish > bullish {
        Sentiment::Bearish
    } else {
        Sentiment::Neutral
    };

    let total = signals.len();
    let strength = if total == 0 {
        0.0
    } else {
        (bullish as f64 - bearish as f64).abs() / total as f64
    };

    TrendSummary {
        sentiment,
        strength,
        strength_label: TrendStrength::from_ratio(strength),
        bullish,
        bearish,
        neutral,
    }
}
