//! Frame: the working buffer produced by each pass.

use super::source::RGBA_CHANNELS;
use crate::color::Rgb;

/// A fully computed working buffer.
///
/// Stores RGBA bytes in row-major order with the same dimensions as the
/// source image. Every pixel is opaque. A `Frame` is only ever constructed
/// from a finished pass, so holding one never exposes a partial result.
///
/// # Example
///
/// ```
/// use mondrian_recolor::{Compositor, Rgb, Snapshot, SourceImage};
///
/// let source = SourceImage::from_rgb(1, 1, &[255, 0, 0]).unwrap();
/// let frame = Compositor::recompute(&source, &Snapshot::new(Rgb::new(0, 0, 0)));
///
/// assert_eq!(frame.width(), 1);
/// assert_eq!(frame.rgba(), &[255, 0, 0, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Frame {
    pub(crate) fn from_parts(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        debug_assert_eq!(
            rgba.len(),
            width as usize * height as usize * RGBA_CHANNELS,
            "rgba length ({}) must match {}x{}",
            rgba.len(),
            width,
            height,
        );
        Self {
            width,
            height,
            rgba,
        }
    }

    /// A frame with no pixels.
    pub fn empty() -> Self {
        Self::from_parts(0, 0, Vec::new())
    }

    /// Frame width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when the frame holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rgba.is_empty()
    }

    /// RGBA bytes, row-major, alpha always 255.
    #[inline]
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Consume the frame, returning its RGBA bytes.
    pub fn into_rgba(self) -> Vec<u8> {
        self.rgba
    }

    /// RGBA of the pixel at `(x, y)`, or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * RGBA_CHANNELS;
        Some([
            self.rgba[i],
            self.rgba[i + 1],
            self.rgba[i + 2],
            self.rgba[i + 3],
        ])
    }

    /// Iterate pixels as colors, alpha dropped.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.rgba
            .chunks_exact(RGBA_CHANNELS)
            .map(|p| Rgb::new(p[0], p[1], p[2]))
    }
}
