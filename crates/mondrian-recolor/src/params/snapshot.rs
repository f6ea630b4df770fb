//! Immutable parameter snapshot for a single pass.

use super::levels::{Threshold, Transparency};
use crate::color::Rgb;
use crate::palette::{Reference, Substitutes};

/// Every user parameter a recompute pass reads, captured at once.
///
/// A pass never looks at live state; it is handed a `Snapshot` by value, so
/// a concurrent edit can only take effect on the next pass.
///
/// # Example
///
/// ```
/// use mondrian_recolor::{Reference, Rgb, Snapshot};
///
/// let snapshot = Snapshot::new(Rgb::new(200, 200, 200))
///     .substitute(Reference::Red, Rgb::new(0, 255, 0))
///     .threshold(80)
///     .transparency(100);
///
/// assert_eq!(snapshot.threshold.get(), 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub substitutes: Substitutes,
    pub background: Rgb,
    pub threshold: Threshold,
    pub transparency: Transparency,
}

impl Snapshot {
    /// Default substitutes, threshold and transparency around `background`.
    pub fn new(background: Rgb) -> Self {
        Self {
            substitutes: Substitutes::default(),
            background,
            threshold: Threshold::default(),
            transparency: Transparency::default(),
        }
    }

    /// Set one substitute color.
    #[inline]
    pub fn substitute(mut self, reference: Reference, color: Rgb) -> Self {
        self.substitutes.set(reference, color);
        self
    }

    /// Replace all substitutes.
    #[inline]
    pub fn substitutes(mut self, substitutes: Substitutes) -> Self {
        self.substitutes = substitutes;
        self
    }

    /// Set the background color.
    #[inline]
    pub fn background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// Set the similarity threshold (clamped to `0..=150`).
    #[inline]
    pub fn threshold(mut self, value: i64) -> Self {
        self.threshold = Threshold::clamped(value);
        self
    }

    /// Set the transparency level (clamped to `0..=255`).
    #[inline]
    pub fn transparency(mut self, value: i64) -> Self {
        self.transparency = Transparency::clamped(value);
        self
    }
}
