use std::io;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("row stride of {stride} bytes is invalid for a {width} pixel wide buffer")]
    InvalidStride { stride: usize, width: u32 },

    #[error("framebuffer is {actual:?} but the camera renders {expected:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("failed to present frame: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
