use anyhow::Context;
use clap::{Parser, ValueEnum};
use pixfilter::filter::{EdgePolicy, FilterKind, WindowOptions};
use pixfilter::io::{DEFAULT_JPEG_QUALITY, ImageFormat, WriteOptions};
use pixfilter::{DirPresenter, LogPresenter, Presenter, RunConfig};
use std::path::PathBuf;

/// Apply a pixel filter to an image and write the results next to it.
#[derive(Debug, Parser)]
#[command(name = "pixfilter", version, about)]
struct Args {
    /// Input image (PNG, JPEG or PPM)
    input: PathBuf,

    /// copy, swapRedBlue, binarize, mean or median
    #[arg(value_parser = parse_filter)]
    filter: FilterKind,

    /// Threshold for binarize, window size for mean and median
    #[arg(allow_negative_numbers = true)]
    parameter: Option<i32>,

    /// Window edge handling for mean and median
    #[arg(long, value_enum, default_value_t = Edge::Unfilled)]
    edge: Edge,

    /// Directory for output files (default: next to the input)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Skip writing the `_copy` file
    #[arg(long)]
    no_copy: bool,

    /// Output format (default: same as the input)
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// JPEG quality
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Write previews of every intermediate image into this directory
    #[arg(long)]
    preview_dir: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Edge {
    Unfilled,
    Clamped,
}

impl From<Edge> for EdgePolicy {
    fn from(edge: Edge) -> Self {
        match edge {
            Edge::Unfilled => EdgePolicy::Unfilled,
            Edge::Clamped => EdgePolicy::Clamped,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Png,
    Jpeg,
    Pnm,
}

impl From<Format> for ImageFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Png => ImageFormat::Png,
            Format::Jpeg => ImageFormat::Jpeg,
            Format::Pnm => ImageFormat::Pnm,
        }
    }
}

fn parse_filter(s: &str) -> Result<FilterKind, String> {
    s.parse::<FilterKind>().map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = RunConfig {
        input: args.input.clone(),
        filter: args.filter,
        parameter: args.parameter,
        window: WindowOptions::with_edge(args.edge.into()),
        out_dir: args.out_dir.clone(),
        write_copy: !args.no_copy,
        format: args.format.map(Into::into),
        write: WriteOptions {
            quality: args.quality,
        },
    };

    if let Some(dir) = &config.out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }

    let mut presenter: Box<dyn Presenter> = match &args.preview_dir {
        Some(dir) => Box::new(
            DirPresenter::new(dir)
                .with_context(|| format!("creating preview directory {}", dir.display()))?,
        ),
        None => Box::new(LogPresenter),
    };

    let report = pixfilter::run(&config, presenter.as_mut())
        .with_context(|| format!("{} on {}", args.filter, args.input.display()))?;

    if let Some(path) = &report.copy_path {
        println!("{}", path.display());
    }
    println!("{}", report.output_path.display());
    Ok(())
}
