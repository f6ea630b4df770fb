//! Unified error type for the mondrian-recolor public API.
//!
//! [`RecolorError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::image::ImageError;
use crate::palette::{PaletteError, ParseColorError};
use std::fmt;

/// Unified error type for the mondrian-recolor public API.
///
/// # Example
///
/// ```
/// use mondrian_recolor::{RecolorError, Rgb, Substitutes};
///
/// fn neon() -> Result<(Substitutes, Rgb), RecolorError> {
///     let subs = Substitutes::from_hex(&["#39ff14", "#ff6ec7", "#00ffff"])?;
///     let background: Rgb = "#111111".parse()?;
///     Ok((subs, background))
/// }
/// assert!(neon().is_ok());
/// ```
#[derive(Debug)]
pub enum RecolorError {
    /// Substitute palette error (wrong count, unknown reference, parse error)
    Palette(PaletteError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
    /// Pixel buffer does not match its dimensions
    Image(ImageError),
}

impl fmt::Display for RecolorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecolorError::Palette(err) => write!(f, "palette error: {}", err),
            RecolorError::ParseColor(err) => write!(f, "color parse error: {}", err),
            RecolorError::Image(err) => write!(f, "image error: {}", err),
        }
    }
}

impl std::error::Error for RecolorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecolorError::Palette(err) => Some(err),
            RecolorError::ParseColor(err) => Some(err),
            RecolorError::Image(err) => Some(err),
        }
    }
}

impl From<PaletteError> for RecolorError {
    fn from(err: PaletteError) -> Self {
        RecolorError::Palette(err)
    }
}

impl From<ParseColorError> for RecolorError {
    fn from(err: ParseColorError) -> Self {
        RecolorError::ParseColor(err)
    }
}

impl From<ImageError> for RecolorError {
    fn from(err: ImageError) -> Self {
        RecolorError::Image(err)
    }
}
