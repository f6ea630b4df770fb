//! Linear blending toward the background color.

use super::rgb::Rgb;

/// Blend `source` toward `background` using `transparency` as the source
/// weight.
///
/// Per channel: `(source * t + background * (255 - t)) / 255`, rounded half
/// up and clamped to `0..=255`. At `t = 255` the source comes back unchanged;
/// at `t = 0` the result is the background.
///
/// Note the naming: a *higher* transparency shows *less* of the background.
///
/// # Example
/// ```
/// use mondrian_recolor::{blend, Rgb};
///
/// let out = blend(Rgb::new(10, 10, 10), Rgb::new(200, 200, 200), 100);
/// assert_eq!(out, Rgb::new(125, 125, 125));
/// ```
#[inline]
pub fn blend(source: Rgb, background: Rgb, transparency: u8) -> Rgb {
    let t = transparency as u32;
    Rgb::new(
        blend_channel(source.r, background.r, t),
        blend_channel(source.g, background.g, t),
        blend_channel(source.b, background.b, t),
    )
}

#[inline]
fn blend_channel(source: u8, background: u8, t: u32) -> u8 {
    let numerator = source as u32 * t + background as u32 * (255 - t);
    ((numerator + 127) / 255).min(255) as u8
}
