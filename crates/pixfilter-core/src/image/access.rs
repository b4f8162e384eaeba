//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels and
//! rectangular blocks of pixels.

use super::{Image, ImageMut};
use crate::Pixel;
use crate::error::{Error, Result};

impl Image {
    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get the pixel at (x, y) without a bounds check on each axis.
    ///
    /// # Panics
    ///
    /// Panics if the linear index falls outside the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Pixel {
        self.inner.pixels[self.inner.index(x, y)]
    }

    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(Pixel::to_rgb)
    }
}

impl ImageMut {
    /// Get the pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get the pixel at (x, y) without a bounds check on each axis.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Pixel {
        self.inner.pixels[self.inner.index(x, y)]
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<()> {
        self.check_bounds(x, y)?;
        self.set_pixel_unchecked(x, y, pixel);
        Ok(())
    }

    /// Set the pixel at (x, y) without a bounds check on each axis.
    ///
    /// # Panics
    ///
    /// Panics if the linear index falls outside the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, pixel: Pixel) {
        let idx = self.inner.index(x, y);
        self.inner.pixels[idx] = pixel;
    }

    /// Set an RGB pixel at (x, y).
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_pixel(x, y, Pixel::new(r, g, b))
    }

    /// Fill the `w x h` block whose top-left corner is (x, y).
    ///
    /// The whole block must lie inside the image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] naming the bottom-right corner
    /// if the block does not fit. Nothing is written in that case.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, pixel: Pixel) -> Result<()> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        let x_end = x.checked_add(w - 1).ok_or(Error::IndexOutOfBounds {
            x: u32::MAX,
            y,
            width: self.width(),
            height: self.height(),
        })?;
        let y_end = y.checked_add(h - 1).ok_or(Error::IndexOutOfBounds {
            x,
            y: u32::MAX,
            width: self.width(),
            height: self.height(),
        })?;
        self.check_bounds(x_end, y_end)?;

        for row in y..=y_end {
            let start = x as usize;
            self.row_mut(row)[start..start + w as usize].fill(pixel);
        }
        Ok(())
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_pixel_out_of_bounds() {
        let image = Image::new(3, 2).unwrap();
        assert_eq!(image.get_pixel(2, 1), Some(Pixel::BLACK));
        assert_eq!(image.get_pixel(3, 0), None);
        assert_eq!(image.get_pixel(0, 2), None);
    }

    #[test]
    fn test_set_pixel() {
        let mut image = ImageMut::new(3, 2).unwrap();
        image.set_rgb(2, 1, 1, 2, 3).unwrap();
        assert_eq!(image.get_pixel(2, 1), Some(Pixel::new(1, 2, 3)));

        let image: Image = image.into();
        assert_eq!(image.get_rgb(2, 1), Some((1, 2, 3)));
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut image = ImageMut::new(3, 2).unwrap();
        assert!(matches!(
            image.set_pixel(3, 0, Pixel::WHITE),
            Err(Error::IndexOutOfBounds { x: 3, y: 0, .. })
        ));
    }

    #[test]
    fn test_fill_rect() {
        let mut image = ImageMut::new(5, 5).unwrap();
        image.fill_rect(1, 2, 3, 2, Pixel::WHITE).unwrap();

        for y in 0..5 {
            for x in 0..5 {
                let inside = (1..4).contains(&x) && (2..4).contains(&y);
                let expected = if inside { Pixel::WHITE } else { Pixel::BLACK };
                assert_eq!(image.get_pixel(x, y), Some(expected), "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_fill_rect_must_fit() {
        let mut image = ImageMut::new(4, 4).unwrap();
        assert!(image.fill_rect(2, 2, 3, 1, Pixel::WHITE).is_err());
        assert!(image.fill_rect(0, 0, 4, 4, Pixel::WHITE).is_ok());
        assert!(image.fill_rect(u32::MAX, 0, 2, 1, Pixel::WHITE).is_err());
        // nothing written by the failed calls beyond the full fill
        assert!(image.pixels().iter().all(|&p| p == Pixel::WHITE));
    }
}
