//! Nearest-neighbor resize to a target height.
//!
//! Photos are fitted to a fixed height before recoloring, keeping the aspect
//! ratio. Nearest-neighbor sampling only ever copies source pixels.

use super::png_codec::MAX_DIMENSION;
use mondrian_recolor::{ImageError, SourceImage, RGBA_CHANNELS};

/// Scale `image` to `target_height`, width following the aspect ratio.
///
/// Returns the image unchanged when it is empty, when `target_height` is 0,
/// or when it already has the requested height. The computed width is at
/// least 1.
///
/// # Errors
///
/// [`ImageError::TooLarge`] if either output side would exceed
/// [`MAX_DIMENSION`].
pub fn resize_to_height(image: &SourceImage, target_height: u32) -> Result<SourceImage, ImageError> {
    if image.is_empty() || target_height == 0 || target_height == image.height() {
        return Ok(image.clone());
    }

    let (width, height) = (image.width() as u64, image.height() as u64);
    let scaled = ((width * target_height as u64 + height / 2) / height).max(1);
    let target_width = u32::try_from(scaled).unwrap_or(u32::MAX);
    if target_width > MAX_DIMENSION || target_height > MAX_DIMENSION {
        return Err(ImageError::TooLarge {
            width: target_width,
            height: target_height,
        });
    }

    tracing::debug!(
        from_width = image.width(),
        from_height = image.height(),
        to_width = target_width,
        to_height = target_height,
        "Resizing source image"
    );

    let src = image.rgba();
    let stride = image.stride();
    let mut out = Vec::with_capacity(target_width as usize * target_height as usize * RGBA_CHANNELS);

    for ty in 0..target_height as u64 {
        let sy = (ty * height / target_height as u64) as usize;
        let row = &src[sy * stride..(sy + 1) * stride];
        for tx in 0..target_width as u64 {
            let sx = (tx * width / target_width as u64) as usize * RGBA_CHANNELS;
            out.extend_from_slice(&row[sx..sx + RGBA_CHANNELS]);
        }
    }

    SourceImage::from_rgba(target_width, target_height, out)
}
