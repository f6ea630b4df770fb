//! Error type for pixel buffer construction.

use std::fmt;

/// Returned when a pixel buffer does not describe a `width x height` image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// Byte length disagrees with the stated dimensions
    BufferSize {
        /// Bytes expected for the stated dimensions
        expected: usize,
        /// Bytes actually supplied
        actual: usize,
    },
    /// `width * height * channels` does not fit in memory
    TooLarge {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::BufferSize { expected, actual } => {
                write!(
                    f,
                    "pixel buffer has {} bytes, expected {}",
                    actual, expected
                )
            }
            ImageError::TooLarge { width, height } => {
                write!(f, "image dimensions {}x{} are too large", width, height)
            }
        }
    }
}

impl std::error::Error for ImageError {}
