//! Block mean filter (box blur)
//!
//! Each window is reduced to the per-channel arithmetic mean of its
//! `W^2` samples, using truncating integer division, and that pixel is
//! written over the window's whole footprint. Every window rescans its
//! samples, so the cost is `O(width * height * W^2)`.
//!
//! See [`crate::window`] for the origin scan and edge policy.

use crate::FilterResult;
use crate::window::{WindowOptions, block_filter};
use pixfilter_core::{Image, Pixel};

/// Block mean filter with the default (unfilled edge) policy.
///
/// # Errors
///
/// Returns [`crate::FilterError::InvalidParameter`] if `window <= 0` or
/// the window does not fit in the image.
pub fn mean_filter(image: &Image, window: i32) -> FilterResult<Image> {
    mean_filter_with(image, window, &WindowOptions::default())
}

/// Block mean filter with explicit window options.
pub fn mean_filter_with(
    image: &Image,
    window: i32,
    options: &WindowOptions,
) -> FilterResult<Image> {
    block_filter("mean_filter", image, window, options, mean_pixel)
}

/// Per-channel truncating mean of `samples`.
///
/// Returns black for an empty slice.
pub fn mean_pixel(samples: &[Pixel]) -> Pixel {
    if samples.is_empty() {
        return Pixel::BLACK;
    }
    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for p in samples {
        r += p.red as u64;
        g += p.green as u64;
        b += p.blue as u64;
    }
    let n = samples.len() as u64;
    Pixel::new((r / n) as u8, (g / n) as u8, (b / n) as u8)
}
