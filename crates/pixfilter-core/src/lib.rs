//! pixfilter Core - Basic data structures for pixel filtering
//!
//! This crate provides the fundamental data structures used throughout
//! the pixfilter workspace:
//!
//! - [`Pixel`] - An RGB triple with packed-value and intensity helpers
//! - [`Image`] / [`ImageMut`] - The raster container (immutable / mutable)
//! - [`Error`] / [`Result`] - The core error type

pub mod error;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use image::{CompareResult, Image, ImageMut};
pub use pixel::{MAX_INTENSITY, Pixel};
