//! Volume confirmation against a moving average of volume.

use super::Sma;
use crate::types::{VolumeClass, VolumeLabel};

/// Latest volume above `average * HIGH_RATIO` counts as high.
const HIGH_RATIO: f64 = 1.5;
/// Latest volume below `average * LOW_RATIO` counts as low.
const LOW_RATIO: f64 = 0.7;

/// Classifies the latest volume as High, Low or Normal relative to its SMA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeAnalysis {
    period: usize,
}

impl Default for VolumeAnalysis {
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl VolumeAnalysis {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Classify the last volume. Too little history or a zero average yields Normal.
    pub fn calculate(&self, volumes: &[f64]) -> VolumeLabel {
        let Some(vma) = Sma::new(self.period).calculate(volumes).value() else {
            return VolumeLabel::normal();
        };
        let Some(&latest) = volumes.last() else {
            return VolumeLabel::normal();
        };
        if vma == 0.0 {
            return VolumeLabel::normal();
        }

        let ratio = latest / vma;
        let classification = if latest > vma * HIGH_RATIO {
            VolumeClass::High
        } else if latest < vma * LOW_RATIO {
            VolumeClass::Low
        } else {
            VolumeClass::Normal
        };

        VolumeLabel::new(classification, Some(ratio))
    }
}
