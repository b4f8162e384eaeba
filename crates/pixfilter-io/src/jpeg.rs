//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and writes baseline
//! RGB JPEG with the `jpeg-encoder` crate. Grayscale input is expanded to
//! RGB. CMYK JPEG is not supported.

use crate::{IoError, IoResult, rgb_bytes};
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use pixfilter_core::{Image, ImageMut, Pixel};
use std::io::{Read, Write};

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let bytes_per_pixel = match info.pixel_format {
        PixelFormat::L8 => 1,
        PixelFormat::L16 => 2,
        PixelFormat::RGB24 => 3,
        PixelFormat::CMYK32 => {
            return Err(IoError::UnsupportedFormat(
                "CMYK JPEG is not supported".to_string(),
            ));
        }
    };

    let expected = width as usize * height as usize * bytes_per_pixel;
    if data.len() < expected {
        return Err(IoError::InvalidData(format!(
            "JPEG data too short: {} bytes for {}x{}",
            data.len(),
            width,
            height
        )));
    }

    let mut image = ImageMut::new(width, height)?;
    for (dst, src) in image
        .pixels_mut()
        .iter_mut()
        .zip(data.chunks_exact(bytes_per_pixel))
    {
        *dst = match info.pixel_format {
            // 16-bit luminance is big-endian; keep the high byte
            PixelFormat::L8 | PixelFormat::L16 => Pixel::gray(src[0]),
            _ => Pixel::new(src[0], src[1], src[2]),
        };
    }

    Ok(image.into())
}

/// Write an image as baseline RGB JPEG.
///
/// # Arguments
/// * `image`   - The image to encode
/// * `writer`  - Destination writer
/// * `quality` - Quality in `1..=100`
pub fn write_jpeg<W: Write>(image: &Image, writer: W, quality: u8) -> IoResult<()> {
    if !(1..=100).contains(&quality) {
        return Err(IoError::EncodeError(format!(
            "JPEG quality must be in 1..=100, got {}",
            quality
        )));
    }
    let (width, height) = image.dimensions();
    let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(IoError::EncodeError(format!(
            "{}x{} exceeds the JPEG size limit of 65535x65535",
            width, height
        )));
    };

    let encoder = Encoder::new(writer, quality);
    encoder
        .encode(&rgb_bytes(image), w, h, ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}
