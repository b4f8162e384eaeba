//! pixfilter - Pixel filters for RGB images
//!
//! A small image filtering toolkit built around a pure filter engine:
//!
//! - Identity copy and red/blue channel swap
//! - Intensity threshold binarization
//! - Block mean and block median over square windows
//! - Image I/O (PNG, JPEG, PPM)
//!
//! The `pixfilter` binary reads an image, runs one filter and writes the
//! results next to the input; [`run`] holds that flow so it can be driven
//! from code as well.
//!
//! # Example
//!
//! ```
//! use pixfilter::filter::{FilterKind, apply};
//! use pixfilter::{Image, Pixel};
//!
//! let image = Image::from_fn(4, 4, |x, _| Pixel::gray(x as u8 * 60)).unwrap();
//! let out = apply(&image, FilterKind::Binarize, 100).unwrap();
//! assert_eq!(out.dimensions(), (4, 4));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixfilter_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixfilter_filter as filter;
pub use pixfilter_io as io;

pub mod present;
pub mod run;

pub use present::{DirPresenter, LogPresenter, Presenter};
pub use run::{RunConfig, RunError, RunReport, run};
