//! Presenting intermediate images
//!
//! The command-line flow hands each image it produces to a [`Presenter`]
//! together with a title. The filter engine never displays anything
//! itself.

use log::info;
use pixfilter_core::Image;
use pixfilter_io::{ImageFormat, IoResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Receiver for images shown to the user.
pub trait Presenter {
    /// Show `image` under `title`.
    fn present(&mut self, image: &Image, title: &str) -> IoResult<()>;
}

/// Logs the title and size of each presented image.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn present(&mut self, image: &Image, title: &str) -> IoResult<()> {
        info!("{}: {}x{}", title, image.width(), image.height());
        Ok(())
    }
}

/// Writes each presented image as `<title>.png` into a directory.
///
/// Characters of the title that are not ASCII alphanumeric, `-` or `_`
/// become `_`.
#[derive(Debug, Clone)]
pub struct DirPresenter {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirPresenter {
    /// Create a presenter writing into `dir`, creating it if needed.
    pub fn new<P: AsRef<Path>>(dir: P) -> IoResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(DirPresenter {
            dir,
            written: Vec::new(),
        })
    }

    /// Preview files written so far, in presentation order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn file_name(title: &str) -> String {
        let mut name: String = title
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        if name.is_empty() {
            name.push_str("untitled");
        }
        name.push_str(".png");
        name
    }
}

impl Presenter for DirPresenter {
    fn present(&mut self, image: &Image, title: &str) -> IoResult<()> {
        let path = self.dir.join(Self::file_name(title));
        pixfilter_io::write_image(image, &path, ImageFormat::Png)?;
        info!("{}: {}x{} -> {}", title, image.width(), image.height(), path.display());
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixfilter_core::Pixel;

    #[test]
    fn test_preview_file_names() {
        assert_eq!(DirPresenter::file_name("Swap Red Blue"), "Swap_Red_Blue.png");
        assert_eq!(DirPresenter::file_name("in/photo.png"), "in_photo_png.png");
        assert_eq!(DirPresenter::file_name(""), "untitled.png");
    }

    #[test]
    fn test_dir_presenter_writes_png() {
        let dir = std::env::temp_dir().join(format!("pixfilter_present_{}", std::process::id()));
        let mut presenter = DirPresenter::new(&dir).unwrap();
        let image = Image::from_fn(3, 2, |x, y| Pixel::new(x as u8, y as u8, 7)).unwrap();

        presenter.present(&image, "Mean").unwrap();
        assert_eq!(presenter.written(), &[dir.join("Mean.png")]);
        assert_eq!(pixfilter_io::read_image(dir.join("Mean.png")).unwrap(), image);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_log_presenter_accepts_anything() {
        let image = Image::new(1, 1).unwrap();
        assert!(LogPresenter.present(&image, "Copy").is_ok());
    }
}
