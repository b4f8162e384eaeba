//! Square window scanning shared by the block mean and block median filters
//!
//! A window of side `W` is placed at every origin of a scan. For each
//! origin, the `W x W` source pixels are gathered into a buffer owned by
//! that single iteration, reduced to one pixel, and the result is written
//! to the whole `W x W` footprint of the window in the output. Windows
//! advance one pixel at a time, so later windows overwrite most of the
//! footprint of earlier ones.
//!
//! # Edge policy
//!
//! With [`EdgePolicy::Unfilled`] (the default) origins satisfy
//! `x < width - W` and `y < height - W`. The last column and the last row
//! of the image are never covered by any footprint and keep the black
//! value of a fresh output image. When `W` equals the width or the height
//! there is no origin at all and the output is entirely black.
//!
//! With [`EdgePolicy::Clamped`] origins satisfy `x <= width - W` and
//! `y <= height - W`, i.e. every window is clamped inside the image and
//! every output pixel is written.

use crate::{FilterError, FilterResult};
use log::{debug, trace};
use pixfilter_core::{Image, Pixel};

/// Which window origins are visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Origins strictly before `dimension - W`; the bottom row and right
    /// column stay unwritten.
    #[default]
    Unfilled,
    /// Origins up to and including `dimension - W`; every pixel is written.
    Clamped,
}

/// Options for the windowed filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowOptions {
    /// Edge policy for the origin scan
    pub edge: EdgePolicy,
}

impl WindowOptions {
    /// Options with the given edge policy.
    pub fn with_edge(edge: EdgePolicy) -> Self {
        WindowOptions { edge }
    }
}

/// A validated window scan over one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowScan {
    size: u32,
    x_origins: u32,
    y_origins: u32,
}

impl WindowScan {
    /// Validate `window` against `image` and compute the origin ranges.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameter`] if `window <= 0` or if
    /// the window is wider or taller than the image.
    pub fn new(image: &Image, window: i32, edge: EdgePolicy) -> FilterResult<Self> {
        let (width, height) = image.dimensions();
        if window <= 0 {
            return Err(FilterError::InvalidParameter(format!(
                "window size must be >= 1, got {window}"
            )));
        }
        let size = window as u32;
        if size > width || size > height {
            return Err(FilterError::InvalidParameter(format!(
                "window size {size} does not fit in {width}x{height} image"
            )));
        }

        let (x_origins, y_origins) = match edge {
            EdgePolicy::Unfilled => (width - size, height - size),
            EdgePolicy::Clamped => (width - size + 1, height - size + 1),
        };
        Ok(WindowScan {
            size,
            x_origins,
            y_origins,
        })
    }

    /// Window side length.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of samples per window, `W^2`.
    #[inline]
    pub fn area(&self) -> usize {
        self.size as usize * self.size as usize
    }

    /// Total number of window origins.
    pub fn origin_count(&self) -> u64 {
        self.x_origins as u64 * self.y_origins as u64
    }

    /// Window origins in row-major order (y outer, x inner).
    pub fn origins(&self) -> impl Iterator<Item = (u32, u32)> + use<> {
        let x_origins = self.x_origins;
        (0..self.y_origins).flat_map(move |y| (0..x_origins).map(move |x| (x, y)))
    }

    /// Gather the window at `(x, y)` row by row into a new buffer.
    pub fn sample(&self, image: &Image, x: u32, y: u32) -> Vec<Pixel> {
        let mut samples = Vec::with_capacity(self.area());
        let start = x as usize;
        for row in y..y + self.size {
            samples.extend_from_slice(&image.row(row)[start..start + self.size as usize]);
        }
        samples
    }
}

/// Run a block filter: reduce each window with `reduce` and write the
/// result over the window's footprint.
pub(crate) fn block_filter<F>(
    name: &str,
    image: &Image,
    window: i32,
    options: &WindowOptions,
    reduce: F,
) -> FilterResult<Image>
where
    F: Fn(&[Pixel]) -> Pixel,
{
    let scan = WindowScan::new(image, window, options.edge)?;
    debug!(
        "{}: {}x{} window={} edge={:?} origins={}",
        name,
        image.width(),
        image.height(),
        scan.size(),
        options.edge,
        scan.origin_count()
    );

    let mut out = image.create_template();
    for (x, y) in scan.origins() {
        let samples = scan.sample(image, x, y);
        let value = reduce(&samples);
        trace!("{name}: window at ({x}, {y}) -> {value}");
        out.fill_rect(x, y, scan.size(), scan.size(), value)?;
    }
    Ok(out.into())
}
