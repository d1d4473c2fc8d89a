use crate::consts::{COLOR_CHANNEL_COUNT, MAX_INTENSITY};
use crate::pipeline::config::DistanceFormula;
use crate::sample::{BandAverage, DistanceScore};

/// Distance of a single band average from full intensity: `|avg - 255|`.
pub fn deviation(avg: BandAverage) -> DistanceScore {
    avg.abs_diff(MAX_INTENSITY)
}

/// Three-channel distance as existing callers have always computed it:
///
///   sqrt((c0 - c2)^2 + (c1 - c1)^2 + (c2 - c0)^2)
///
/// truncated to an integer. This equals `sqrt(2) * |c0 - c2|`; the green band
/// and the target do not contribute.
pub fn literal_distance(
    color: [BandAverage; COLOR_CHANNEL_COUNT],
    _target: [u32; COLOR_CHANNEL_COUNT],
) -> DistanceScore {
    let [c0, c1, c2] = color.map(f64::from);
    let dist = ((c0 - c2).powi(2) + (c1 - c1).powi(2) + (c2 - c0).powi(2)).sqrt();
    dist as DistanceScore
}

/// Euclidean RGB distance between the color and the target, truncated.
pub fn euclidean_distance(
    color: [BandAverage; COLOR_CHANNEL_COUNT],
    target: [u32; COLOR_CHANNEL_COUNT],
) -> DistanceScore {
    let sum_sq: f64 = color
        .iter()
        .zip(target.iter())
        .map(|(&c, &t)| (f64::from(c) - f64::from(t)).powi(2))
        .sum();
    sum_sq.sqrt() as DistanceScore
}

/// Dispatch to the distance function selected by `formula`.
pub fn distance(
    formula: DistanceFormula,
    color: [BandAverage; COLOR_CHANNEL_COUNT],
    target: [u32; COLOR_CHANNEL_COUNT],
) -> DistanceScore {
    match formula {
        DistanceFormula::Literal => literal_distance(color, target),
        DistanceFormula::Euclidean => euclidean_distance(color, target),
    }
}
