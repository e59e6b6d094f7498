//! Support and resistance levels from recent highs and lows.

use crate::types::{Computed, HistoricalPoint, SupportResistance};

/// Number of trailing points considered.
pub const LOOKBACK: usize = 20;

/// Two-tier support/resistance over the last [`LOOKBACK`] points.
///
/// Highs are ranked descending and lows ascending; tier 1 is the extreme and tier 2 the
/// value a third of the way down the ranking. Points without a high/low use their close.
pub fn support_resistance(points: &[HistoricalPoint]) -> Computed<SupportResistance> {
    if points.is_empty() {
        return Computed::insufficient(1, 0);
    }

    let recent = &points[points.len().saturating_sub(LOOKBACK)..];
    let mut highs: Vec<f64> = recent.iter().map(HistoricalPoint::high_or_close).collect();
    let mut lows: Vec<f64> = recent.iter().map(HistoricalPoint::low_or_close).collect();

    highs.sort_by(|a, b| b.total_cmp(a));
    lows.sort_by(|a, b| a.total_cmp(b));

    let second_tier = recent.len() / 3;
    Computed::ready(SupportResistance {
        resistance1: highs[0],
        resistance2: highs[second_tier],
        support1: lows[0],
        support2: lows[second_tier],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_from_ranges() {
        let points: Vec<HistoricalPoint> = (0..30)
            .map(|i| {
                let base = 100.0 + i as f64;
                HistoricalPoint::new(i as i64, base).with_range(base + 2.0, base - 2.0)
            })
            .collect();

        let levels = support_resistance(&points).value().unwrap();
        // last 20 closes are 110..=129
        assert_eq!(levels.resistance1, 131.0);
        assert_eq!(levels.resistance2, 131.0 - 6.0);
        assert_eq!(levels.support1, 108.0);
        assert_eq!(levels.support2, 108.0 + 6.0);
    }

    #[test]
    fn test_levels_fall_back_to_close() {
        let points: Vec<HistoricalPoint> = [5.0, 1.0, 3.0]
            .iter()
            .enumerate()
            .map(|(i, c)| HistoricalPoint::new(i as i64, *c))
            .collect();

        let levels = support_resistance(&points).value().unwrap();
        assert_eq!(levels.resistance1, 5.0);
        assert_eq!(levels.resistance2, 3.0);
        assert_eq!(levels.support1, 1.0);
        assert_eq!(levels.support2, 3.0);
    }

    #[test]
    fn test_levels_empty_is_insufficient() {
        assert!(!support_resistance(&[]).is_ready());
    }
}
