//! Error types for pixfilter-filter
//!
//! Filters are pure functions; the only recoverable failures are bad
//! parameters and unknown filter names at the dispatch layer.

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixfilter_core::Error),

    /// Invalid filter parameter (window size out of range)
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Filter name not recognized by the dispatch layer
    #[error("unsupported filter: {0:?} (expected one of copy, swapRedBlue, binarize, mean, median)")]
    UnsupportedFilter(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
