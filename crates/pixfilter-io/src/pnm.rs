//! PNM (Portable Any Map) format support
//!
//! Reads PPM in binary (P6) and ASCII (P3) form and writes binary P6.
//! Samples with a maxval other than 255 are rescaled to 8 bits; maxval
//! above 255 uses two big-endian bytes per sample in P6.

use crate::{IoError, IoResult, rgb_bytes};
use pixfilter_core::{Image, ImageMut, Pixel};
use std::io::{BufRead, Read, Write};

/// Read a PPM image (P3/P6) from a reader.
///
/// # Arguments
/// * `reader` - A buffered reader positioned at the `P3`/`P6` magic
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Image> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let mut cursor = HeaderCursor::new(&data);
    let magic = cursor.token()?;
    let binary = match magic {
        b"P6" => true,
        b"P3" => false,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM type {:?} (only P3 and P6 are supported)",
                String::from_utf8_lossy(magic)
            )));
        }
    };
    let width = cursor.number()?;
    let height = cursor.number()?;
    let maxval = cursor.number()?;
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::InvalidData(format!("invalid PNM maxval {}", maxval)));
    }

    if width == 0 || height == 0 {
        return Err(pixfilter_core::Error::InvalidDimension { width, height }.into());
    }
    let count = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| IoError::InvalidData(format!("PNM size {}x{} overflows", width, height)))?;

    // the raster must be present before the image is allocated
    let truncated = || IoError::InvalidData(format!("PNM raster truncated for {}x{}", width, height));
    let samples: Vec<u32> = if binary {
        // exactly one whitespace byte separates the header from the raster
        let start = cursor.pos + 1;
        let bytes_per_sample = if maxval > 255 { 2 } else { 1 };
        let end = count
            .checked_mul(bytes_per_sample)
            .and_then(|n| n.checked_add(start))
            .ok_or_else(truncated)?;
        let raster = data.get(start..end).ok_or_else(truncated)?;
        if bytes_per_sample == 2 {
            raster
                .chunks_exact(2)
                .map(|c| u16::from_be_bytes([c[0], c[1]]) as u32)
                .collect()
        } else {
            raster.iter().map(|&b| b as u32).collect()
        }
    } else {
        // every ASCII sample takes at least a digit and a separator
        let remaining = data.len().saturating_sub(cursor.pos);
        if count > remaining / 2 + 1 {
            return Err(truncated());
        }
        (0..count)
            .map(|_| cursor.number())
            .collect::<IoResult<_>>()?
    };

    let scale = |v: u32| -> IoResult<u8> {
        if v > maxval {
            return Err(IoError::InvalidData(format!(
                "PNM sample {} exceeds maxval {}",
                v, maxval
            )));
        }
        Ok(if maxval == 255 {
            v as u8
        } else {
            ((v * 255 + maxval / 2) / maxval) as u8
        })
    };

    let mut image = ImageMut::new(width, height)?;
    for (dst, rgb) in image.pixels_mut().iter_mut().zip(samples.chunks_exact(3)) {
        *dst = Pixel::new(scale(rgb[0])?, scale(rgb[1])?, scale(rgb[2])?);
    }

    Ok(image.into())
}

/// Write an image as binary PPM (P6, maxval 255) to a writer.
pub fn write_pnm<W: Write>(image: &Image, mut writer: W) -> IoResult<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width(), image.height())?;
    writer.write_all(&rgb_bytes(image))?;
    writer.flush()?;
    Ok(())
}

/// Tokenizer for the whitespace-separated PNM header, skipping comments.
struct HeaderCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> HeaderCursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        HeaderCursor { data, pos: 0 }
    }

    fn skip_space_and_comments(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if b == b'#' {
                while let Some(&c) = self.data.get(self.pos) {
                    if c == b'\n' {
                        break;
                    }
                    self.pos += 1;
                }
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn token(&mut self) -> IoResult<&'a [u8]> {
        self.skip_space_and_comments();
        let start = self.pos;
        while let Some(&b) = self.data.get(self.pos) {
            if b.is_ascii_whitespace() || b == b'#' {
                break;
            }
            self.pos += 1;
        }
        if start == self.pos {
            return Err(IoError::InvalidData("PNM header truncated".to_string()));
        }
        Ok(&self.data[start..self.pos])
    }

    fn number(&mut self) -> IoResult<u32> {
        let token = self.token()?;
        std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                IoError::InvalidData(format!(
                    "expected a number in PNM header, got {:?}",
                    String::from_utf8_lossy(token)
                ))
            })
    }
}
