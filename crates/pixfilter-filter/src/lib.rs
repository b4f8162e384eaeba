//! pixfilter-filter - Pixel filtering operations
//!
//! This crate provides the pixel filter engine:
//!
//! - Identity copy and red/blue channel swap
//! - Intensity threshold binarization
//! - Block mean (box blur) over square windows
//! - Block median over square windows, ordered by packed RGB value
//! - A closed [`FilterKind`] selection and a single [`apply`] dispatch
//!
//! Every filter takes an immutable [`pixfilter_core::Image`] and returns a
//! new image with the same dimensions.

pub mod binarize;
pub mod block_conv;
pub mod dispatch;
mod error;
pub mod point;
pub mod rank;
pub mod window;

pub use error::{FilterError, FilterResult};

// Re-export commonly used functions
pub use binarize::binarize;
pub use block_conv::{mean_filter, mean_filter_with};
pub use dispatch::{FilterKind, apply, apply_with};
pub use point::{copy, swap_red_blue};
pub use rank::{median_filter, median_filter_with};
pub use window::{EdgePolicy, WindowOptions, WindowScan};
