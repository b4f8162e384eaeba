//! Filter selection and dispatch
//!
//! [`FilterKind`] is the closed set of filters. [`apply`] runs one of them
//! with a single integer parameter whose meaning depends on the kind:
//!
//! | kind          | parameter                  |
//! |---------------|----------------------------|
//! | `Copy`        | ignored                    |
//! | `SwapRedBlue` | ignored                    |
//! | `Binarize`    | intensity threshold `T`    |
//! | `Mean`        | window side length `W`     |
//! | `Median`      | window side length `W`     |

use crate::window::WindowOptions;
use crate::{FilterError, FilterResult, binarize, block_conv, point, rank};
use pixfilter_core::Image;
use std::fmt;
use std::str::FromStr;

/// The available filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Identity copy
    Copy,
    /// Exchange red and blue channels
    SwapRedBlue,
    /// Black/white by intensity threshold
    Binarize,
    /// Block mean over W x W windows
    Mean,
    /// Block median (by packed value) over W x W windows
    Median,
}

impl FilterKind {
    /// All filters, in declaration order.
    pub const ALL: [FilterKind; 5] = [
        FilterKind::Copy,
        FilterKind::SwapRedBlue,
        FilterKind::Binarize,
        FilterKind::Mean,
        FilterKind::Median,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::SwapRedBlue => "swapRedBlue",
            Self::Binarize => "binarize",
            Self::Mean => "mean",
            Self::Median => "median",
        }
    }

    /// Suffix appended to the file stem of the output file.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::SwapRedBlue => "swapRedBlue",
            Self::Binarize => "binarized",
            Self::Mean => "mean",
            Self::Median => "median",
        }
    }

    /// Human-readable title for presenting the filtered image.
    pub fn title(self) -> &'static str {
        match self {
            Self::Copy => "Copy",
            Self::SwapRedBlue => "Swap Red Blue",
            Self::Binarize => "Binarized",
            Self::Mean => "Mean",
            Self::Median => "Median",
        }
    }

    /// Whether the integer parameter is meaningful for this filter.
    pub fn uses_parameter(self) -> bool {
        matches!(self, Self::Binarize | Self::Mean | Self::Median)
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "copy" => Ok(Self::Copy),
            "swapredblue" => Ok(Self::SwapRedBlue),
            "binarize" => Ok(Self::Binarize),
            "mean" => Ok(Self::Mean),
            "median" => Ok(Self::Median),
            _ => Err(FilterError::UnsupportedFilter(s.to_string())),
        }
    }
}

/// Apply `filter` to `image` with the default window options.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameter`] for an invalid window size
/// (mean and median only).
///
/// # Examples
///
/// ```
/// use pixfilter_core::{Image, Pixel};
/// use pixfilter_filter::{FilterKind, apply};
///
/// let image = Image::from_fn(4, 4, |_, _| Pixel::new(1, 2, 3)).unwrap();
/// let out = apply(&image, FilterKind::SwapRedBlue, 0).unwrap();
/// assert_eq!(out.get_pixel(0, 0), Some(Pixel::new(3, 2, 1)));
/// ```
pub fn apply(image: &Image, filter: FilterKind, parameter: i32) -> FilterResult<Image> {
    apply_with(image, filter, parameter, &WindowOptions::default())
}

/// Apply `filter` to `image` with explicit window options.
///
/// The options only affect [`FilterKind::Mean`] and [`FilterKind::Median`].
pub fn apply_with(
    image: &Image,
    filter: FilterKind,
    parameter: i32,
    options: &WindowOptions,
) -> FilterResult<Image> {
    let out = match filter {
        FilterKind::Copy => point::copy(image),
        FilterKind::SwapRedBlue => point::swap_red_blue(image),
        FilterKind::Binarize => binarize::binarize(image, parameter),
        FilterKind::Mean => block_conv::mean_filter_with(image, parameter, options)?,
        FilterKind::Median => rank::median_filter_with(image, parameter, options)?,
    };
    debug_assert_eq!(
        out.dimensions(),
        image.dimensions(),
        "{filter} changed the image dimensions"
    );
    Ok(out)
}
