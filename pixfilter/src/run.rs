//! The read, filter, write flow behind the `pixfilter` binary

use crate::present::Presenter;
use log::{debug, info};
use pixfilter_filter::{FilterError, FilterKind, WindowOptions};
use pixfilter_io::{ImageFormat, IoError, WriteOptions, derived_path};
use std::path::{Path, PathBuf};

/// Errors from a filter run
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("filter {0} requires an integer parameter")]
    MissingParameter(FilterKind),

    #[error("image I/O failed: {0}")]
    Io(#[from] IoError),

    #[error("filter failed: {0}")]
    Filter(#[from] FilterError),
}

/// Settings for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Image to read
    pub input: PathBuf,
    /// Filter to apply
    pub filter: FilterKind,
    /// Threshold or window size; ignored by copy and swapRedBlue
    pub parameter: Option<i32>,
    /// Window edge handling for mean and median
    pub window: WindowOptions,
    /// Directory for outputs; defaults to the input's directory
    pub out_dir: Option<PathBuf>,
    /// Also write `<stem>_copy.<ext>`
    pub write_copy: bool,
    /// Output format; defaults to the input's format
    pub format: Option<ImageFormat>,
    /// Encoder options
    pub write: WriteOptions,
}

impl RunConfig {
    /// Config with default options for `input` and `filter`.
    pub fn new<P: AsRef<Path>>(input: P, filter: FilterKind, parameter: Option<i32>) -> Self {
        RunConfig {
            input: input.as_ref().to_path_buf(),
            filter,
            parameter,
            window: WindowOptions::default(),
            out_dir: None,
            write_copy: true,
            format: None,
            write: WriteOptions::default(),
        }
    }

    /// Where the output with `suffix` is written.
    pub fn output_path(&self, suffix: &str) -> PathBuf {
        let path = derived_path(&self.input, suffix, self.format);
        match (&self.out_dir, path.file_name()) {
            (Some(dir), Some(name)) => dir.join(name),
            _ => path,
        }
    }
}

/// Files written by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// The `_copy` file, unless disabled
    pub copy_path: Option<PathBuf>,
    /// The filtered image
    pub output_path: PathBuf,
    /// Size of the input (and every output)
    pub dimensions: (u32, u32),
}

/// Read the input, present and write a copy, apply the filter, then
/// present and write the result.
///
/// # Errors
///
/// Returns [`RunError::MissingParameter`] before touching the input when
/// the filter needs a parameter and none was given.
pub fn run(config: &RunConfig, presenter: &mut dyn Presenter) -> Result<RunReport, RunError> {
    let parameter = match (config.parameter, config.filter.uses_parameter()) {
        (Some(p), _) => p,
        (None, false) => 0,
        (None, true) => return Err(RunError::MissingParameter(config.filter)),
    };

    let format = match config.format {
        Some(format) => format,
        None => pixfilter_io::detect_format(&config.input)?,
    };
    let image = pixfilter_io::read_image(&config.input)?;
    info!(
        "read {} ({}x{}, {:?})",
        config.input.display(),
        image.width(),
        image.height(),
        format
    );
    presenter.present(&image, &config.input.to_string_lossy())?;

    let copy = pixfilter_filter::copy(&image);
    presenter.present(&copy, FilterKind::Copy.title())?;
    let copy_path = if config.write_copy {
        let path = config.output_path(FilterKind::Copy.suffix());
        pixfilter_io::write_image_with(&copy, &path, format, &config.write)?;
        info!("wrote {}", path.display());
        Some(path)
    } else {
        None
    };

    debug!("applying {} with parameter {}", config.filter, parameter);
    let filtered = pixfilter_filter::apply_with(&image, config.filter, parameter, &config.window)?;
    presenter.present(&filtered, config.filter.title())?;

    let output_path = config.output_path(config.filter.suffix());
    pixfilter_io::write_image_with(&filtered, &output_path, format, &config.write)?;
    info!("wrote {}", output_path.display());

    Ok(RunReport {
        copy_path,
        output_path,
        dimensions: image.dimensions(),
    })
}
