//! Per-channel color distance.
//!
//! Classification compares each channel independently against the threshold
//! (a Chebyshev-style test), so the distance is kept as a channel triple
//! rather than collapsed into a single scalar.

use super::rgb::Rgb;

/// Absolute per-channel difference `[|dr|, |dg|, |db|]`.
#[inline]
pub fn channel_distance(a: Rgb, b: Rgb) -> [u8; 3] {
    [a.r.abs_diff(b.r), a.g.abs_diff(b.g), a.b.abs_diff(b.b)]
}

/// Largest of the three per-channel differences.
#[inline]
pub fn max_channel_distance(a: Rgb, b: Rgb) -> u8 {
    let [dr, dg, db] = channel_distance(a, b);
    dr.max(dg).max(db)
}

/// True iff every channel difference is strictly below `threshold`.
///
/// A threshold of 0 never matches, not even identical colors.
#[inline]
pub fn within_threshold(a: Rgb, b: Rgb, threshold: u8) -> bool {
    channel_distance(a, b).iter().all(|&d| d < threshold)
}
