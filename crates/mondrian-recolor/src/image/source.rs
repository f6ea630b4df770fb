//! The immutable source image.

use std::sync::Arc;

use super::error::ImageError;
use crate::color::Rgb;

/// Bytes per RGBA pixel.
pub const RGBA_CHANNELS: usize = 4;

pub(crate) fn rgba_len(width: u32, height: u32) -> Result<usize, ImageError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(RGBA_CHANNELS))
        .ok_or(ImageError::TooLarge { width, height })
}

/// The original photograph, read-only once loaded.
///
/// Stores RGBA bytes in row-major order behind an `Arc`, so clones share
/// the buffer and no pass can mutate it.
///
/// A zero width or height is accepted and simply describes an empty image.
///
/// # Example
///
/// ```
/// use mondrian_recolor::{Rgb, SourceImage};
///
/// let image = SourceImage::from_rgb(2, 1, &[255, 0, 0, 10, 10, 10]).unwrap();
/// assert_eq!(image.pixel(1, 0), Rgb::new(10, 10, 10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    width: u32,
    height: u32,
    rgba: Arc<[u8]>,
}

impl SourceImage {
    /// Wrap an RGBA buffer of exactly `width * height * 4` bytes.
    ///
    /// # Errors
    ///
    /// [`ImageError::BufferSize`] if the length is wrong.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, ImageError> {
        let expected = rgba_len(width, height)?;
        if rgba.len() != expected {
            return Err(ImageError::BufferSize {
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba: rgba.into(),
        })
    }

    /// Build from tightly packed RGB bytes; alpha is set to 255.
    ///
    /// # Errors
    ///
    /// [`ImageError::BufferSize`] if `rgb.len() != width * height * 3`.
    pub fn from_rgb(width: u32, height: u32, rgb: &[u8]) -> Result<Self, ImageError> {
        let expected = rgba_len(width, height)? / RGBA_CHANNELS * 3;
        if rgb.len() != expected {
            return Err(ImageError::BufferSize {
                expected,
                actual: rgb.len(),
            });
        }
        let rgba = rgb
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect();
        Self::from_rgba(width, height, rgba)
    }

    /// Build from a row-major list of colors; alpha is set to 255.
    ///
    /// # Errors
    ///
    /// [`ImageError::BufferSize`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: &[Rgb]) -> Result<Self, ImageError> {
        let rgba = pixels.iter().flat_map(|p| p.with_alpha(255)).collect();
        Self::from_rgba(width, height, rgba)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when width or height is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw RGBA bytes, row-major.
    #[inline]
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// RGB of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        let i = (y as usize * self.width as usize + x as usize) * RGBA_CHANNELS;
        Rgb::new(self.rgba[i], self.rgba[i + 1], self.rgba[i + 2])
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * RGBA_CHANNELS
    }
}
