//! pixfilter-io - Image I/O
//!
//! Decodes image files into RGB [`Image`]s and encodes them back:
//!
//! - PNG (feature `png-format`) via the `png` crate
//! - JPEG (feature `jpeg`) via `jpeg-decoder` / `jpeg-encoder`
//! - PPM (feature `pnm`)
//!
//! The format of an input file is detected from its magic bytes, not its
//! extension. [`derived_path`] builds output file names next to an input
//! file, such as `photo_mean.png` for `photo.png`.

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use log::debug;
use pixfilter_core::Image;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};

/// JPEG quality used when none is specified
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Encoder options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// JPEG quality in `1..=100` (ignored by other formats)
    pub quality: u8,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Read an image from a file, detecting its format from the header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let file = File::open(path)?;
    let image = read_with_format(BufReader::new(file), format)?;
    debug!(
        "read {}: {:?} {}x{}",
        path.display(),
        format,
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Read an image from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Image> {
    let format = detect_format_from_bytes(data)?;
    read_with_format(Cursor::new(data), format)
}

fn read_with_format<R>(reader: R, format: ImageFormat) -> IoResult<Image>
where
    R: std::io::BufRead + std::io::Seek,
{
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        #[allow(unreachable_patterns)]
        other => Err(disabled(other)),
    }
}

/// Write an image to a file in the given format.
pub fn write_image<P: AsRef<Path>>(image: &Image, path: P, format: ImageFormat) -> IoResult<()> {
    write_image_with(image, path, format, &WriteOptions::default())
}

/// Write an image to a file with explicit encoder options.
pub fn write_image_with<P: AsRef<Path>>(
    image: &Image,
    path: P,
    format: ImageFormat,
    options: &WriteOptions,
) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_with_format(image, &mut writer, format, options)?;
    writer.flush()?;
    debug!(
        "wrote {}: {:?} {}x{}",
        path.display(),
        format,
        image.width(),
        image.height()
    );
    Ok(())
}

/// Encode an image into an in-memory buffer.
pub fn write_image_mem(image: &Image, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_with_format(image, &mut buffer, format, &WriteOptions::default())?;
    Ok(buffer)
}

#[allow(unused_variables)]
fn write_with_format<W: Write>(
    image: &Image,
    writer: W,
    format: ImageFormat,
    options: &WriteOptions,
) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(image, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(image, writer, options.quality),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(image, writer),
        #[allow(unreachable_patterns)]
        other => Err(disabled(other)),
    }
}

#[allow(dead_code)]
fn disabled(format: ImageFormat) -> IoError {
    IoError::UnsupportedFormat(format!("{:?} support is not enabled", format))
}

/// Build an output path next to `input` by appending `_<suffix>` to its
/// stem.
///
/// The stem is the file name up to its **first** `.`, so
/// `shots/cat.v2.png` becomes `shots/cat_mean.v2.png` when the extension
/// is kept. With `format` set, everything after the stem is replaced by
/// the format's extension (`shots/cat_mean.jpg`).
///
/// # Examples
///
/// ```
/// use pixfilter_io::{ImageFormat, derived_path};
/// use std::path::PathBuf;
///
/// assert_eq!(derived_path("img/photo.png", "copy", None), PathBuf::from("img/photo_copy.png"));
/// assert_eq!(
///     derived_path("photo.png", "mean", Some(ImageFormat::Jpeg)),
///     PathBuf::from("photo_mean.jpg")
/// );
/// ```
pub fn derived_path<P: AsRef<Path>>(input: P, suffix: &str, format: Option<ImageFormat>) -> PathBuf {
    let input = input.as_ref();
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (stem, rest) = match name.find('.') {
        Some(0) | None => (name.as_str(), ""),
        Some(i) => (&name[..i], &name[i + 1..]),
    };

    let ext = match format {
        Some(f) => f.extension(),
        None => rest,
    };
    let file_name = if ext.is_empty() {
        format!("{stem}_{suffix}")
    } else {
        format!("{stem}_{suffix}.{ext}")
    };
    input.with_file_name(file_name)
}

/// Interleaved `RGBRGB...` bytes of an image, row-major.
#[allow(dead_code)]
pub(crate) fn rgb_bytes(image: &Image) -> Vec<u8> {
    let mut data = Vec::with_capacity(image.pixels().len() * 3);
    for p in image.pixels() {
        data.extend_from_slice(&[p.red, p.green, p.blue]);
    }
    data
}
