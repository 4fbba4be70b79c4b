use crate::color::unpack_pixel;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use itertools::Itertools;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A display surface that a finished frame is handed to.
pub trait Present {
    fn present(&mut self, frame: &Framebuffer) -> Result<()>;
}

/// Writes the frame to disk as a plain-text PPM image.
pub struct PpmPresenter {
    path: PathBuf,
}

impl PpmPresenter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        return Self { path: path.into() };
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Present for PpmPresenter {
    fn present(&mut self, frame: &Framebuffer) -> Result<()> {
        let mut file = fs::File::create(&self.path)?;
        write_ppm(frame, &mut file)?;
        log::info!("wrote {}x{} image to {}", frame.width(), frame.height(), self.path.display());
        Ok(())
    }
}

/// Serialises the visible pixels as `P3` with a max value of 255.
pub fn write_ppm<W: Write>(frame: &Framebuffer, writer: &mut W) -> Result<()> {
    let pixels: String = (0..frame.height())
        // get x, y coordinates of every pixel
        .cartesian_product(0..frame.width())
        .map(|(y, x)| {
            let [r, g, b] = unpack_pixel(frame.pixel(x, y));
            format!("{} {} {}", r, g, b)
        })
        .join("\n");

    write!(writer, "P3\n{} {}\n255\n{}\n", frame.width(), frame.height(), pixels)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ppm_lists_pixels_row_major() {
        let mut frame = Framebuffer::with_stride(2, 2, 16).unwrap();
        frame.set_pixel(0, 0, 0x00FF0000);
        frame.set_pixel(1, 0, 0x0000FF00);
        frame.set_pixel(0, 1, 0x000000FF);
        frame.set_pixel(1, 1, 0x00FFFFFF);

        let mut out = Vec::new();
        write_ppm(&frame, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "P3\n2 2\n255\n255 0 0\n0 255 0\n0 0 255\n255 255 255\n"
        );
    }

    #[test]
    fn presenter_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.ppm");
        let frame = Framebuffer::new(3, 1).unwrap();

        let mut presenter = PpmPresenter::new(&path);
        assert_eq!(presenter.path(), path.as_path());
        presenter.present(&frame).unwrap();

        let written = fs::read_to_string(presenter.path()).unwrap();
        assert!(written.starts_with("P3\n3 1\n255\n"));
        assert_eq!(written.lines().count(), 3 + 3);
    }

    #[test]
    fn presenter_reports_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut presenter = PpmPresenter::new(dir.path().join("missing").join("frame.ppm"));
        let frame = Framebuffer::new(1, 1).unwrap();
        assert!(matches!(
            presenter.present(&frame),
            Err(crate::error::RenderError::Io(_))
        ));
    }
}
