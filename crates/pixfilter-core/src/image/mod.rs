//! Image - the RGB raster container
//!
//! # Pixel layout
//!
//! - Pixels are stored row-major in a single contiguous buffer
//! - The pixel at `(x, y)` lives at index `y * width + x`
//! - A freshly allocated image is all black (every channel zero)
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for cheap cloning (shared ownership) and is never
//! mutated in place. To modify pixel data, convert to [`ImageMut`] via
//! [`Image::try_into_mut`] or [`Image::to_mut`], then convert back with
//! `Into<Image>`.

mod access;
pub mod compare;

pub use compare::CompareResult;

use crate::Pixel;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal image data
#[derive(Debug)]
struct ImageData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Row-major pixel buffer, `width * height` long
    pixels: Vec<Pixel>,
}

impl ImageData {
    fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(ImageData {
            width,
            height,
            pixels: vec![Pixel::BLACK; width as usize * height as usize],
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl Clone for ImageData {
    fn clone(&self) -> Self {
        ImageData {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// Immutable RGB image.
///
/// # Examples
///
/// ```
/// use pixfilter_core::{Image, Pixel};
///
/// let image = Image::new(640, 480).unwrap();
/// assert_eq!(image.width(), 640);
/// assert_eq!(image.height(), 480);
/// assert_eq!(image.get_pixel(0, 0), Some(Pixel::BLACK));
/// ```
#[derive(Debug, Clone)]
pub struct Image {
    inner: Arc<ImageData>,
}

impl Image {
    /// Create a new all-black image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Image {
            inner: Arc::new(ImageData::new(width, height)?),
        })
    }

    /// Create an image from a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::DimensionMismatch`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            let rows = (pixels.len() / width as usize) as u32;
            return Err(Error::DimensionMismatch {
                expected: (width, height),
                actual: (width, rows),
            });
        }
        Ok(Image {
            inner: Arc::new(ImageData {
                width,
                height,
                pixels,
            }),
        })
    }

    /// Create an image by evaluating `f(x, y)` for every coordinate.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Pixel,
    {
        let mut out = ImageMut::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                out.set_pixel_unchecked(x, y, f(x, y));
            }
        }
        Ok(out.into())
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Row-major pixel buffer.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.inner.pixels
    }

    /// Pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[Pixel] {
        let start = self.inner.index(0, y);
        &self.inner.pixels[start..start + self.inner.width as usize]
    }

    /// Number of `Image` handles sharing this data.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check whether two images have the same width and height.
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Create an all-black image with the same dimensions.
    pub fn create_template(&self) -> ImageMut {
        ImageMut {
            inner: ImageData {
                width: self.inner.width,
                height: self.inner.height,
                pixels: vec![Pixel::BLACK; self.inner.pixels.len()],
            },
        }
    }

    /// Create a copy with its own storage (not a shared handle).
    pub fn deep_clone(&self) -> Self {
        Image {
            inner: Arc::new((*self.inner).clone()),
        }
    }

    /// Try to take unique ownership of the data for mutation.
    ///
    /// Returns the image back unchanged if other handles share the data.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(inner) => Ok(ImageMut { inner }),
            Err(inner) => Err(Image { inner }),
        }
    }

    /// Create a mutable deep copy.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: (*self.inner).clone(),
        }
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.sizes_equal(other) && self.inner.pixels == other.inner.pixels)
    }
}

impl Eq for Image {}

/// Mutable RGB image with unique ownership of its pixels.
#[derive(Debug)]
pub struct ImageMut {
    inner: ImageData,
}

impl ImageMut {
    /// Create a new all-black mutable image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(ImageMut {
            inner: ImageData::new(width, height)?,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Row-major pixel buffer.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.inner.pixels
    }

    /// Mutable row-major pixel buffer.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.inner.pixels
    }

    /// Mutable pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [Pixel] {
        let start = self.inner.index(0, y);
        let width = self.inner.width as usize;
        &mut self.inner.pixels[start..start + width]
    }

    /// Set every pixel to `pixel`.
    pub fn fill(&mut self, pixel: Pixel) {
        self.inner.pixels.fill(pixel);
    }
}

impl From<ImageMut> for Image {
    fn from(image: ImageMut) -> Self {
        Image {
            inner: Arc::new(image.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_creation() {
        let image = Image::new(100, 50).unwrap();
        assert_eq!(image.width(), 100);
        assert_eq!(image.height(), 50);
        assert_eq!(image.pixels().len(), 5000);
        assert!(image.pixels().iter().all(|&p| p == Pixel::BLACK));
    }

    #[test]
    fn test_image_creation_invalid() {
        assert!(matches!(
            Image::new(0, 10),
            Err(Error::InvalidDimension {
                width: 0,
                height: 10
            })
        ));
        assert!(Image::new(10, 0).is_err());
        assert!(ImageMut::new(0, 0).is_err());
    }

    #[test]
    fn test_from_pixels_length_mismatch() {
        let pixels = vec![Pixel::WHITE; 5];
        assert!(matches!(
            Image::from_pixels(2, 3, pixels),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_from_fn_row_major() {
        let image = Image::from_fn(3, 2, |x, y| Pixel::new(x as u8, y as u8, 0)).unwrap();
        assert_eq!(image.pixels()[4], Pixel::new(1, 1, 0));
        assert_eq!(image.row(1)[2], Pixel::new(2, 1, 0));
    }

    #[test]
    fn test_clone_shares_data() {
        let image = Image::new(4, 4).unwrap();
        let clone = image.clone();
        assert_eq!(image.ref_count(), 2);
        assert_eq!(clone, image);
    }

    #[test]
    fn test_deep_clone() {
        let image = Image::new(4, 4).unwrap();
        let copy = image.deep_clone();
        assert_eq!(image.ref_count(), 1);
        assert_eq!(copy.ref_count(), 1);
        assert_eq!(copy, image);
    }

    #[test]
    fn test_try_into_mut() {
        let image = Image::new(2, 2).unwrap();
        let shared = image.clone();
        let image = image.try_into_mut().unwrap_err();
        drop(shared);

        let mut image_mut = image.try_into_mut().unwrap();
        image_mut.fill(Pixel::WHITE);
        let image: Image = image_mut.into();
        assert!(image.pixels().iter().all(|&p| p == Pixel::WHITE));
    }

    #[test]
    fn test_to_mut_leaves_source_untouched() {
        let image = Image::new(2, 2).unwrap();
        let mut copy = image.to_mut();
        copy.row_mut(1)[1] = Pixel::WHITE;
        assert_eq!(image.get_pixel(1, 1), Some(Pixel::BLACK));
        assert_eq!(copy.get_pixel(1, 1), Some(Pixel::WHITE));
    }

    #[test]
    fn test_create_template() {
        let image = Image::from_fn(3, 5, |_, _| Pixel::WHITE).unwrap();
        let template = image.create_template();
        assert_eq!(template.dimensions(), (3, 5));
        assert!(template.pixels().iter().all(|&p| p == Pixel::BLACK));
    }
}
