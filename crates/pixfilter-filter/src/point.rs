//! Point operations
//!
//! Per-pixel transforms with no neighborhood dependency.

use log::debug;
use pixfilter_core::{Image, Pixel};

/// Copy an image pixel by pixel into fresh storage.
///
/// The result compares equal to the input but does not share its buffer,
/// so it can be written out as an artifact independent of the source.
pub fn copy(image: &Image) -> Image {
    debug!("copy: {}x{}", image.width(), image.height());
    image.deep_clone()
}

/// Exchange the red and blue channels of every pixel.
///
/// Green is untouched. Applying the filter twice returns the original.
pub fn swap_red_blue(image: &Image) -> Image {
    debug!("swap_red_blue: {}x{}", image.width(), image.height());
    map_pixels(image, Pixel::swap_red_blue)
}

/// Apply `f` independently to every pixel.
pub(crate) fn map_pixels<F>(image: &Image, f: F) -> Image
where
    F: Fn(Pixel) -> Pixel,
{
    let mut out = image.create_template();
    for (dst, &src) in out.pixels_mut().iter_mut().zip(image.pixels()) {
        *dst = f(src);
    }
    out.into()
}
