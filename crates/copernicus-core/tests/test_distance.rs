use copernicus_core::error::CopernicusError;
use copernicus_core::pipeline::config::DistanceFormula;
use copernicus_core::sample::{parse_hex_color, ColorVector};
use copernicus_core::scoring::distance::{deviation, distance, euclidean_distance, literal_distance};
use copernicus_core::scoring::ScoringMode;

// ---------------------------------------------------------------------------
// Single-channel deviation
// ---------------------------------------------------------------------------

#[test]
fn test_deviation_endpoints() {
    assert_eq!(deviation(255), 0);
    assert_eq!(deviation(0), 255);
}

#[test]
fn test_deviation_above_full_intensity() {
    // 12-bit imagery can exceed 255.
    assert_eq!(deviation(300), 45);
}

#[test]
fn test_deviation_is_monotonic_in_distance_from_255() {
    let mut by_distance: Vec<u32> = (0..=510).collect();
    by_distance.sort_by_key(|&v| (v as i64 - 255).abs());
    let scores: Vec<u32> = by_distance.iter().map(|&v| deviation(v)).collect();
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));
}

// ---------------------------------------------------------------------------
// Three-channel distance
// ---------------------------------------------------------------------------

#[test]
fn test_literal_distance_swaps_outer_channels() {
    // Only (c0 - c2) contributes, twice: sqrt(100 + 100) = 14.14
    assert_eq!(literal_distance([0, 0, 10], [0, 0, 0]), 14);
    assert_eq!(literal_distance([10, 50, 20], [10, 50, 20]), 14);
}

#[test]
fn test_literal_distance_ignores_green_and_target() {
    let a = literal_distance([200, 10, 50], [125, 10, 125]);
    let b = literal_distance([200, 240, 50], [0, 0, 0]);
    assert_eq!(a, b);
    assert_eq!(a, 212);
}

#[test]
fn test_literal_distance_zero_when_outer_channels_match() {
    assert_eq!(literal_distance([125, 10, 125], [125, 10, 125]), 0);
    assert_eq!(literal_distance([40, 200, 40], [40, 200, 40]), 0);
}

#[test]
fn test_literal_distance_symmetric_in_outer_channels() {
    assert_eq!(
        literal_distance([200, 10, 50], [125, 10, 125]),
        literal_distance([50, 10, 200], [125, 10, 125])
    );
}

#[test]
fn test_euclidean_distance_identity() {
    assert_eq!(euclidean_distance([10, 50, 20], [10, 50, 20]), 0);
}

#[test]
fn test_euclidean_distance_uses_every_channel() {
    // sqrt(3^2 + 4^2 + 0) = 5
    assert_eq!(euclidean_distance([3, 4, 7], [0, 0, 7]), 5);
    // sqrt(200) truncated
    assert_eq!(euclidean_distance([0, 0, 10], [0, 10, 0]), 14);
}

#[test]
fn test_distance_dispatches_on_formula() {
    let color = [10, 50, 20];
    assert_eq!(distance(DistanceFormula::Literal, color, color), 14);
    assert_eq!(distance(DistanceFormula::Euclidean, color, color), 0);
}

// ---------------------------------------------------------------------------
// Scoring modes
// ---------------------------------------------------------------------------

#[test]
fn test_mode_band_counts() {
    assert_eq!(ScoringMode::Deviation.band_count(), 1);
    let mode = ScoringMode::TargetColor {
        target: [0, 0, 0],
        formula: DistanceFormula::Literal,
    };
    assert_eq!(mode.band_count(), 3);
}

#[test]
fn test_mode_rejects_mismatched_vector() {
    let err = ScoringMode::Deviation
        .score(&ColorVector::Triple([1, 2, 3]))
        .unwrap_err();
    assert!(matches!(err, CopernicusError::InvalidInput(_)));
}

#[test]
fn test_mode_display() {
    let mode = ScoringMode::TargetColor {
        target: [0x12, 0xAB, 0xFF],
        formula: DistanceFormula::Euclidean,
    };
    assert_eq!(format!("{mode}"), "Target #12ABFF (Euclidean)");
    assert_eq!(format!("{}", ScoringMode::Deviation), "Deviation from 255");
}

#[test]
fn test_color_vector_from_averages() {
    assert_eq!(ColorVector::from_averages(&[7]).unwrap(), ColorVector::Single(7));
    assert_eq!(
        ColorVector::from_averages(&[1, 2, 3]).unwrap(),
        ColorVector::Triple([1, 2, 3])
    );
    assert!(ColorVector::from_averages(&[1, 2]).is_err());
}

// ---------------------------------------------------------------------------
// Target color parsing
// ---------------------------------------------------------------------------

#[test]
fn test_parse_hex_color_reads_each_pair() {
    assert_eq!(parse_hex_color("7D0A7D").unwrap(), [125, 10, 125]);
    assert_eq!(parse_hex_color("00ff80").unwrap(), [0, 255, 128]);
}

#[test]
fn test_parse_hex_color_rejects_malformed() {
    for bad in ["", "FFF", "GG0000", "#FF0000", "FF00001", "+F0000"] {
        assert!(
            matches!(parse_hex_color(bad), Err(CopernicusError::InvalidInput(_))),
            "{bad:?} should be rejected"
        );
    }
}
