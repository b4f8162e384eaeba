//! PNG image format support
//!
//! Every PNG flavor is decoded to RGB: palette and low bit-depth images
//! are expanded, 16-bit samples are reduced to 8 bits, gray is replicated
//! into all three channels, and alpha is dropped. Images are always
//! written as 8-bit RGB.

use crate::{IoError, IoResult, rgb_bytes};
use pixfilter_core::{Image, ImageMut, Pixel};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            bit_depth
        )));
    }
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut image = ImageMut::new(width, height)?;
    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        let row = &data[row_start..row_start + width as usize * samples];
        for (dst, src) in image.row_mut(y).iter_mut().zip(row.chunks_exact(samples)) {
            *dst = match samples {
                1 | 2 => Pixel::gray(src[0]),
                _ => Pixel::new(src[0], src[1], src[2]),
            };
        }
    }

    Ok(image.into())
}

/// Write a PNG image as 8-bit RGB
pub fn write_png<W: Write>(image: &Image, writer: W) -> IoResult<()> {
    let width = image.width();
    let height = image.height();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let data = rgb_bytes(image);
    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_raw(width: u32, height: u32, color: ColorType, data: &[u8]) -> Vec<u8> {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, width, height);
            encoder.set_color(color);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
            writer.finish().unwrap();
        }
        buffer
    }

    #[test]
    fn test_png_roundtrip_rgb() {
        let image = Image::from_fn(5, 4, |x, y| Pixel::new(x as u8 * 50, y as u8 * 60, 7)).unwrap();

        let mut buffer = Vec::new();
        write_png(&image, &mut buffer).unwrap();
        let decoded = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(decoded.dimensions(), (5, 4));
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_png_read_grayscale_expands() {
        let buffer = encode_raw(3, 1, ColorType::Grayscale, &[0, 128, 255]);
        let image = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(image.get_pixel(0, 0), Some(Pixel::gray(0)));
        assert_eq!(image.get_pixel(1, 0), Some(Pixel::gray(128)));
        assert_eq!(image.get_pixel(2, 0), Some(Pixel::gray(255)));
    }

    #[test]
    fn test_png_read_rgba_drops_alpha() {
        let buffer = encode_raw(2, 1, ColorType::Rgba, &[1, 2, 3, 0, 4, 5, 6, 255]);
        let image = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(image.get_pixel(0, 0), Some(Pixel::new(1, 2, 3)));
        assert_eq!(image.get_pixel(1, 0), Some(Pixel::new(4, 5, 6)));
    }

    #[test]
    fn test_png_read_garbage() {
        let result = read_png(Cursor::new(b"\x89PNG\r\n\x1a\nnot really".to_vec()));
        assert!(matches!(result, Err(IoError::DecodeError(_))));
    }
}
