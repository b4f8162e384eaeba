//! Intensity thresholding
//!
//! Maps every pixel to black or white by comparing its intensity
//! (`floor(sqrt(r^2 + g^2 + b^2))`, see [`Pixel::intensity`]) with a
//! threshold `T`:
//!
//! | intensity | output |
//! |-----------|--------|
//! | `< T`     | black  |
//! | `>= T`    | white  |
//!
//! A pixel whose intensity equals the threshold is white. Because the
//! intensity is truncated to an integer, ties occur for every pixel whose
//! exact norm lies in `[T, T + 1)`.

use crate::point::map_pixels;
use log::{debug, warn};
use pixfilter_core::{Image, MAX_INTENSITY, Pixel};

/// Binarize an image with intensity threshold `threshold`.
///
/// Any threshold is accepted. `threshold <= 0` produces an all-white
/// image and `threshold > 441` an all-black one.
pub fn binarize(image: &Image, threshold: i32) -> Image {
    debug!(
        "binarize: {}x{} threshold={}",
        image.width(),
        image.height(),
        threshold
    );
    if threshold < 0 || threshold as u32 > MAX_INTENSITY {
        warn!(
            "binarize: threshold {} outside intensity range [0, {}], output is uniform",
            threshold, MAX_INTENSITY
        );
    }
    map_pixels(image, |p| binarize_pixel(p, threshold))
}

/// Binarize a single pixel.
#[inline]
pub fn binarize_pixel(pixel: Pixel, threshold: i32) -> Pixel {
    if (pixel.intensity() as i64) < threshold as i64 {
        Pixel::BLACK
    } else {
        Pixel::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binarize_pixel() {
        // gray(100) has intensity 173
        assert_eq!(binarize_pixel(Pixel::gray(100), 174), Pixel::BLACK);
        assert_eq!(binarize_pixel(Pixel::gray(100), 172), Pixel::WHITE);
    }

    #[test]
    fn test_tie_is_white() {
        assert_eq!(binarize_pixel(Pixel::gray(100), 173), Pixel::WHITE);
        assert_eq!(binarize_pixel(Pixel::BLACK, 0), Pixel::WHITE);
        assert_eq!(binarize_pixel(Pixel::WHITE, 441), Pixel::WHITE);
    }

    #[test]
    fn test_truncation_creates_ties() {
        // sqrt(2 * 9^2) = 12.73 and sqrt(12^2) = 12 both truncate to 12
        assert_eq!(Pixel::new(9, 9, 0).intensity(), 12);
        assert_eq!(binarize_pixel(Pixel::new(9, 9, 0), 12), Pixel::WHITE);
        assert_eq!(binarize_pixel(Pixel::new(12, 0, 0), 12), Pixel::WHITE);
        assert_eq!(binarize_pixel(Pixel::new(11, 0, 0), 12), Pixel::BLACK);
    }

    #[test]
    fn test_threshold_out_of_range() {
        let image = Image::from_fn(8, 8, |x, y| Pixel::gray((x * 32 + y) as u8)).unwrap();

        let all_white = binarize(&image, -5);
        assert!(all_white.pixels().iter().all(|&p| p == Pixel::WHITE));

        let all_black = binarize(&image, 442);
        assert!(all_black.pixels().iter().all(|&p| p == Pixel::BLACK));

        let extreme = binarize(&image, i32::MIN);
        assert!(extreme.pixels().iter().all(|&p| p == Pixel::WHITE));
    }

    #[test]
    fn test_solid_image_at_threshold() {
        let image = Image::from_fn(5, 4, |_, _| Pixel::new(30, 40, 0)).unwrap();
        // intensity is exactly 50
        let out = binarize(&image, 50);
        assert_eq!(out.dimensions(), (5, 4));
        assert!(out.pixels().iter().all(|&p| p == Pixel::WHITE));
    }
}
