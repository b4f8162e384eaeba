//! pixfilter-test - Regression test framework for pixfilter
//!
//! This crate provides a regression test framework supporting three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! It also builds deterministic synthetic images so regression tests do
//! not depend on binary fixtures.
//!
//! # Usage
//!
//! ```ignore
//! use pixfilter_test::{RegParams, gradient_image};
//!
//! let mut rp = RegParams::new("binarize");
//! let image = gradient_image(16, 16).unwrap();
//! rp.compare_values(16.0, image.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod images;
mod params;

pub use error::{TestError, TestResult};
pub use images::{checker_image, gradient_image, noise_image, solid_image};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixfilter-test is at crates/pixfilter-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
