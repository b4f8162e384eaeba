//! RGB pixel value
//!
//! A [`Pixel`] holds three 8-bit channels. There is no alpha channel.
//!
//! # Packed layout
//!
//! [`Pixel::packed`] encodes a pixel as a 24-bit integer `0x00RRGGBB`
//! (red in the most significant used byte). The packed value is the sort
//! key used by the median filter.

use std::fmt;

/// Shift amounts for the packed `0x00RRGGBB` layout
pub const RED_SHIFT: u32 = 16;
pub const GREEN_SHIFT: u32 = 8;
pub const BLUE_SHIFT: u32 = 0;

/// Largest possible [`Pixel::intensity`] value, `floor(sqrt(3 * 255^2))`.
pub const MAX_INTENSITY: u32 = 441;

/// A single RGB pixel.
///
/// # Examples
///
/// ```
/// use pixfilter_core::Pixel;
///
/// let p = Pixel::new(0x12, 0x34, 0x56);
/// assert_eq!(p.packed(), 0x0012_3456);
/// assert_eq!(Pixel::from_packed(0x0012_3456), p);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Pixel {
    /// Pure black (0, 0, 0)
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    /// Pure white (255, 255, 255)
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    /// Create a pixel from its three channels.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Pixel { red, green, blue }
    }

    /// Create a gray pixel with all channels set to `value`.
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Pixel::new(value, value, value)
    }

    /// Encode as `0x00RRGGBB`.
    #[inline]
    pub const fn packed(self) -> u32 {
        ((self.red as u32) << RED_SHIFT)
            | ((self.green as u32) << GREEN_SHIFT)
            | ((self.blue as u32) << BLUE_SHIFT)
    }

    /// Decode from `0x00RRGGBB`. Bits above 24 are ignored.
    #[inline]
    pub const fn from_packed(value: u32) -> Self {
        Pixel::new(
            ((value >> RED_SHIFT) & 0xff) as u8,
            ((value >> GREEN_SHIFT) & 0xff) as u8,
            ((value >> BLUE_SHIFT) & 0xff) as u8,
        )
    }

    /// Euclidean norm of the channels, truncated to an integer.
    ///
    /// Computed exactly with integer square root, so the result is
    /// `floor(sqrt(r^2 + g^2 + b^2))` in `[0, MAX_INTENSITY]`.
    #[inline]
    pub fn intensity(self) -> u32 {
        let r = self.red as u32;
        let g = self.green as u32;
        let b = self.blue as u32;
        (r * r + g * g + b * b).isqrt()
    }

    /// Channels as an `(r, g, b)` tuple.
    #[inline]
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// Same pixel with red and blue exchanged.
    #[inline]
    pub const fn swap_red_blue(self) -> Self {
        Pixel::new(self.blue, self.green, self.red)
    }
}

impl From<(u8, u8, u8)> for Pixel {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Pixel::new(red, green, blue)
    }
}

impl From<Pixel> for (u8, u8, u8) {
    fn from(p: Pixel) -> Self {
        p.to_rgb()
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.packed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_layout() {
        assert_eq!(Pixel::new(255, 0, 0).packed(), 0x00ff_0000);
        assert_eq!(Pixel::new(0, 255, 0).packed(), 0x0000_ff00);
        assert_eq!(Pixel::new(0, 0, 255).packed(), 0x0000_00ff);
        assert_eq!(Pixel::WHITE.packed(), 0x00ff_ffff);
        assert_eq!(Pixel::BLACK.packed(), 0);
    }

    #[test]
    fn test_from_packed_ignores_high_byte() {
        // ARGB values with an opaque alpha byte decode to the same pixel
        assert_eq!(Pixel::from_packed(0xff12_3456), Pixel::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_intensity_truncates() {
        assert_eq!(Pixel::BLACK.intensity(), 0);
        // sqrt(3 * 255^2) = 441.67
        assert_eq!(Pixel::WHITE.intensity(), MAX_INTENSITY);
        // sqrt(3 * 100^2) = 173.2
        assert_eq!(Pixel::gray(100).intensity(), 173);
        // 3-4-5 triangle is exact
        assert_eq!(Pixel::new(3, 4, 0).intensity(), 5);
        // sqrt(2) truncates to 1
        assert_eq!(Pixel::new(1, 1, 0).intensity(), 1);
    }

    #[test]
    fn test_swap_red_blue() {
        let p = Pixel::new(10, 20, 30);
        assert_eq!(p.swap_red_blue(), Pixel::new(30, 20, 10));
        assert_eq!(p.swap_red_blue().swap_red_blue(), p);
    }

    #[test]
    fn test_display() {
        assert_eq!(Pixel::new(0x12, 0xab, 0x05).to_string(), "#12ab05");
    }
}
