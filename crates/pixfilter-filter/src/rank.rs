//! Block median filter
//!
//! Each window is reduced to the median of its samples' packed
//! `0x00RRGGBB` values (see [`Pixel::packed`]), not a per-channel median.
//! The selected value is always the full color of one sampled pixel, so
//! channels never get mixed across pixels. The packed ordering is
//! dominated by red, then green, then blue, and does not follow any
//! intensity measure.
//!
//! For `n = W^2` sorted samples the selected index is `n/2 - 1` when `n`
//! is even (lower middle) and `(n - 1)/2` when `n` is odd.
//!
//! See [`crate::window`] for the origin scan and edge policy.

use crate::FilterResult;
use crate::window::{WindowOptions, block_filter};
use pixfilter_core::{Image, Pixel};

/// Block median filter with the default (unfilled edge) policy.
///
/// # Errors
///
/// Returns [`crate::FilterError::InvalidParameter`] if `window <= 0` or
/// the window does not fit in the image.
pub fn median_filter(image: &Image, window: i32) -> FilterResult<Image> {
    median_filter_with(image, window, &WindowOptions::default())
}

/// Block median filter with explicit window options.
pub fn median_filter_with(
    image: &Image,
    window: i32,
    options: &WindowOptions,
) -> FilterResult<Image> {
    block_filter("median_filter", image, window, options, median_pixel)
}

/// Index of the median in a sorted collection of `n` values.
#[inline]
pub fn median_index(n: usize) -> usize {
    if n % 2 == 0 {
        (n / 2).saturating_sub(1)
    } else {
        (n - 1) / 2
    }
}

/// Median of `samples` by packed value.
///
/// Returns black for an empty slice.
pub fn median_pixel(samples: &[Pixel]) -> Pixel {
    if samples.is_empty() {
        return Pixel::BLACK;
    }
    let mut packed: Vec<u32> = samples.iter().map(|p| p.packed()).collect();
    packed.sort_unstable();
    Pixel::from_packed(packed[median_index(packed.len())])
}
