use std::fmt;

use ndarray::{Array2, ErrorKind, ShapeError};
use serde::{Deserialize, Serialize};

use crate::consts::{COLOR_CHANNEL_COUNT, MAX_INTENSITY};
use crate::error::{CopernicusError, Result};

/// Mean intensity of one band of one candidate.
pub type BandAverage = u32;

/// Dissimilarity of a candidate to the target; lower is closer.
pub type DistanceScore = u32;

/// Position of a candidate in the request that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub usize);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One image under consideration: its identifier and its band paths in
/// B02, B03, B04 order (or just B02 for deviation ranking).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub id: CandidateId,
    pub bands: Vec<String>,
}

impl Candidate {
    pub fn new(index: usize, bands: Vec<String>) -> Self {
        Self {
            id: CandidateId(index),
            bands,
        }
    }

    pub fn band_count(&self) -> usize {
        self.bands.len()
    }
}

/// Pixel intensities for one band, row-major, shape = (rows, cols).
#[derive(Clone, Debug, PartialEq)]
pub struct PixelSample {
    pub data: Array2<u32>,
}

impl PixelSample {
    pub fn new(data: Array2<u32>) -> Self {
        Self { data }
    }

    /// Build a sample from nested rows. Rows of unequal length are rejected.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> std::result::Result<Self, ShapeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(ShapeError::from_kind(ErrorKind::IncompatibleShape));
        }
        let flat: Vec<u32> = rows.into_iter().flatten().collect();
        Ok(Self::new(Array2::from_shape_vec((height, width), flat)?))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn min(&self) -> Option<u32> {
        self.data.iter().copied().min()
    }

    pub fn max(&self) -> Option<u32> {
        self.data.iter().copied().max()
    }
}

/// Composite color of a candidate: a single band average or a B02/B03/B04 triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorVector {
    Single(BandAverage),
    Triple([BandAverage; COLOR_CHANNEL_COUNT]),
}

impl ColorVector {
    pub fn from_averages(averages: &[BandAverage]) -> Result<Self> {
        match *averages {
            [single] => Ok(Self::Single(single)),
            [c0, c1, c2] => Ok(Self::Triple([c0, c1, c2])),
            _ => Err(CopernicusError::InvalidInput(format!(
                "a color vector needs 1 or {COLOR_CHANNEL_COUNT} band averages, got {}",
                averages.len()
            ))),
        }
    }
}

impl fmt::Display for ColorVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(v) => write!(f, "({v})"),
            Self::Triple([c0, c1, c2]) => write!(f, "({c0}, {c1}, {c2})"),
        }
    }
}

/// Parse an `RRGGBB` hex color into three intensities.
pub fn parse_hex_color(hex: &str) -> Result<[u32; COLOR_CHANNEL_COUNT]> {
    let invalid = || CopernicusError::InvalidInput(format!("target color {hex:?} is not RRGGBB"));
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |start: usize| u32::from_str_radix(&hex[start..start + 2], 16).map_err(|_| invalid());
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

/// Reject target colors with components above the 8-bit range.
pub fn check_target(target: [u32; COLOR_CHANNEL_COUNT]) -> Result<()> {
    if let Some(c) = target.iter().find(|&&c| c > MAX_INTENSITY) {
        return Err(CopernicusError::InvalidInput(format!(
            "target color component {c} exceeds {MAX_INTENSITY}"
        )));
    }
    Ok(())
}
