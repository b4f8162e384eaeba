//! Image comparison operations
//!
//! - Pixel equality checks
//! - Pixel difference counting
//! - Per-channel maximum and mean absolute difference

use super::Image;
use crate::error::{Error, Result};

/// Full comparison result
#[derive(Debug, Clone, PartialEq)]
pub struct CompareResult {
    /// Whether images are equal
    pub equal: bool,
    /// Number of differing pixels
    pub n_diff: u64,
    /// First differing coordinate in row-major order
    pub first_diff: Option<(u32, u32)>,
    /// Largest absolute difference of any single channel
    pub max_channel_diff: u8,
    /// Mean absolute channel difference over all channels of all pixels
    pub mean_abs_diff: f64,
}

impl Image {
    /// Compare two images of the same size pixel by pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn compare(&self, other: &Image) -> Result<CompareResult> {
        if !self.sizes_equal(other) {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }

        let width = self.width() as usize;
        let mut n_diff = 0u64;
        let mut first_diff = None;
        let mut max_channel_diff = 0u8;
        let mut abs_sum = 0u64;

        for (i, (a, b)) in self.pixels().iter().zip(other.pixels()).enumerate() {
            if a == b {
                continue;
            }
            n_diff += 1;
            if first_diff.is_none() {
                first_diff = Some(((i % width) as u32, (i / width) as u32));
            }
            for d in [
                a.red.abs_diff(b.red),
                a.green.abs_diff(b.green),
                a.blue.abs_diff(b.blue),
            ] {
                max_channel_diff = max_channel_diff.max(d);
                abs_sum += d as u64;
            }
        }

        let n_channels = self.pixels().len() as f64 * 3.0;
        Ok(CompareResult {
            equal: n_diff == 0,
            n_diff,
            first_diff,
            max_channel_diff,
            mean_abs_diff: abs_sum as f64 / n_channels,
        })
    }

    /// Count the pixels that differ between two images of the same size.
    pub fn count_pixel_diffs(&self, other: &Image) -> Result<u64> {
        Ok(self.compare(other)?.n_diff)
    }
}
