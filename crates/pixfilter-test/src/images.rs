//! Synthetic test images

use crate::TestResult;
use pixfilter_core::{Image, Pixel};
use rand::prelude::*;

/// Image filled with a single color.
pub fn solid_image(width: u32, height: u32, pixel: Pixel) -> TestResult<Image> {
    Ok(Image::from_fn(width, height, |_, _| pixel)?)
}

/// Gray ramp whose intensity increases monotonically in row-major order.
///
/// The gray level of pixel `i = y * width + x` is
/// `i * 255 / (width * height - 1)`.
pub fn gradient_image(width: u32, height: u32) -> TestResult<Image> {
    let last = (width as u64 * height as u64).saturating_sub(1).max(1);
    Ok(Image::from_fn(width, height, |x, y| {
        let i = y as u64 * width as u64 + x as u64;
        Pixel::gray((i * 255 / last) as u8)
    })?)
}

/// Checkerboard of `cell x cell` squares alternating `a` and `b`.
pub fn checker_image(width: u32, height: u32, cell: u32, a: Pixel, b: Pixel) -> TestResult<Image> {
    let cell = cell.max(1);
    Ok(Image::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 { a } else { b }
    })?)
}

/// Uniform RGB noise from a seeded generator; the same seed always
/// gives the same image.
pub fn noise_image(width: u32, height: u32, seed: u64) -> TestResult<Image> {
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(Image::from_fn(width, height, |_, _| {
        Pixel::from_packed(rng.next_u32())
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_is_monotonic() {
        let image = gradient_image(8, 4).unwrap();
        let pixels = image.pixels();
        assert_eq!(pixels[0], Pixel::gray(0));
        assert_eq!(pixels[31], Pixel::gray(255));
        assert!(pixels.windows(2).all(|w| w[0].intensity() <= w[1].intensity()));
    }

    #[test]
    fn test_checker() {
        let image = checker_image(4, 4, 2, Pixel::BLACK, Pixel::WHITE).unwrap();
        assert_eq!(image.get_pixel(1, 1), Some(Pixel::BLACK));
        assert_eq!(image.get_pixel(2, 1), Some(Pixel::WHITE));
        assert_eq!(image.get_pixel(3, 3), Some(Pixel::BLACK));
    }

    #[test]
    fn test_noise_is_deterministic() {
        let a = noise_image(5, 5, 42).unwrap();
        let b = noise_image(5, 5, 42).unwrap();
        let c = noise_image(5, 5, 43).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
