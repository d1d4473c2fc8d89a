use ndarray::{Array2, Axis};
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{CopernicusError, Result};
use crate::sample::{BandAverage, PixelSample};

/// Integer mean of every intensity in the sample, truncated toward zero.
///
/// An empty sample is rejected with [`CopernicusError::DegenerateInput`].
pub fn average(sample: &PixelSample) -> Result<BandAverage> {
    let count = sample.len();
    if count == 0 {
        return Err(CopernicusError::DegenerateInput);
    }
    let mean = intensity_sum(&sample.data) / count as u64;
    // The mean never exceeds the largest element, which fits in u32.
    Ok(mean as BandAverage)
}

fn intensity_sum(data: &Array2<u32>) -> u64 {
    if data.len() >= PARALLEL_PIXEL_THRESHOLD {
        data.axis_iter(Axis(0))
            .into_par_iter()
            .map(|row| row.iter().map(|&v| u64::from(v)).sum::<u64>())
            .sum()
    } else {
        data.iter().map(|&v| u64::from(v)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_sum_matches_sequential() {
        let data = Array2::from_shape_fn((300, 300), |(r, c)| ((r * 7 + c * 13) % 4096) as u32);
        let sequential: u64 = data.iter().map(|&v| u64::from(v)).sum();
        assert!(data.len() >= PARALLEL_PIXEL_THRESHOLD);
        assert_eq!(intensity_sum(&data), sequential);
    }
}
