pub mod aggregate;
pub mod distance;
pub mod rank;

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{CopernicusError, Result};
use crate::pipeline::config::DistanceFormula;
use crate::sample::{ColorVector, DistanceScore};

/// How candidates are scored, which also fixes how many bands each one carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoringMode {
    /// One band per candidate, scored by its deviation from full intensity.
    Deviation,
    /// Three bands per candidate, scored against a target color.
    TargetColor {
        target: [u32; COLOR_CHANNEL_COUNT],
        formula: DistanceFormula,
    },
}

impl ScoringMode {
    pub fn band_count(&self) -> usize {
        match self {
            Self::Deviation => 1,
            Self::TargetColor { .. } => COLOR_CHANNEL_COUNT,
        }
    }

    /// Score a candidate's color vector with the distance function of this mode.
    pub fn score(&self, color: &ColorVector) -> Result<DistanceScore> {
        match (self, color) {
            (Self::Deviation, ColorVector::Single(avg)) => Ok(distance::deviation(*avg)),
            (Self::TargetColor { target, formula }, ColorVector::Triple(bands)) => {
                Ok(distance::distance(*formula, *bands, *target))
            }
            _ => Err(CopernicusError::InvalidInput(format!(
                "color vector {color} does not match {} band(s)",
                self.band_count()
            ))),
        }
    }
}

impl std::fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deviation => write!(f, "Deviation from 255"),
            Self::TargetColor { target, formula } => write!(
                f,
                "Target #{:02X}{:02X}{:02X} ({formula})",
                target[0], target[1], target[2]
            ),
        }
    }
}
