use crate::error::{RenderError, Result};
use rayon::prelude::*;

const BYTES_PER_PIXEL: usize = 4;

/// Rectangular grid of packed 0RGB pixels.
///
/// Rows are `stride` bytes apart; any padding past the last pixel of a row
/// is never written by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    stride: usize,
    pixels: Vec<u32>,
}

impl Framebuffer {
    /// Tightly packed buffer, `stride == width * 4`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        return Self::with_stride(width, height, width as usize * BYTES_PER_PIXEL);
    }

    /// Buffer with a row stride in bytes chosen by the presentation layer.
    pub fn with_stride(width: u32, height: u32, stride: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        if stride < width as usize * BYTES_PER_PIXEL || stride % BYTES_PER_PIXEL != 0 {
            return Err(RenderError::InvalidStride { stride, width });
        }

        let pitch = stride / BYTES_PER_PIXEL;
        return Ok(Self {
            width,
            height,
            stride,
            pixels: vec![0; pitch * height as usize],
        });
    }

    /// Reallocates the buffer at a new size. Previous content is dropped.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        *self = Self::new(width, height)?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes.
    pub fn stride(&self) -> usize {
        self.stride
    }

    fn pitch(&self) -> usize {
        self.stride / BYTES_PER_PIXEL
    }

    /// # Panics
    ///
    /// If `(x, y)` lies outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        return self.pixels[y as usize * self.pitch() + x as usize];
    }

    /// # Panics
    ///
    /// If `(x, y)` lies outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: u32) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let pitch = self.pitch();
        self.pixels[y as usize * pitch + x as usize] = pixel;
    }

    /// Visible rows top to bottom, padding excluded.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        let width = self.width as usize;
        return self.pixels.chunks(self.pitch()).map(move |row| &row[..width]);
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u32]> {
        let width = self.width as usize;
        let pitch = self.pitch();
        return self.pixels.chunks_mut(pitch).map(move |row| &mut row[..width]);
    }

    /// Disjoint visible rows for parallel writers.
    pub fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = &mut [u32]> {
        let width = self.width as usize;
        let pitch = self.pitch();
        return self.pixels.par_chunks_mut(pitch).map(move |row| &mut row[..width]);
    }

    /// Raw memory as a 32-bit top-down DIB reads it: B, G, R, 0 per pixel,
    /// padding included.
    pub fn to_bytes(&self) -> Vec<u8> {
        return self.pixels.iter().flat_map(|p| p.to_le_bytes()).collect();
    }
}
