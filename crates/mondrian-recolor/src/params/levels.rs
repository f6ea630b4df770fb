//! Clamped integer parameters.
//!
//! Out-of-range inputs are clamped, never rejected, so a collaborator that
//! forwards raw slider or query values always gets a usable parameter.

/// Per-channel similarity tolerance, in `0..=150`.
///
/// A pixel matches a reference when every channel differs by strictly less
/// than this value, so `0` disables classification entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    /// Smallest accepted value.
    pub const MIN: u8 = 0;
    /// Largest accepted value.
    pub const MAX: u8 = 150;
    /// Default tolerance.
    pub const DEFAULT: u8 = 80;

    /// Create a threshold, clamping into `0..=150`.
    ///
    /// ```
    /// use mondrian_recolor::Threshold;
    /// assert_eq!(Threshold::clamped(200).get(), 150);
    /// assert_eq!(Threshold::clamped(-5).get(), 0);
    /// ```
    #[inline]
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// The raw value.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Blend weight of the source pixel for unmatched pixels, in `0..=255`.
///
/// `255` keeps the source pixel, `0` replaces it with the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Transparency(u8);

impl Transparency {
    /// Smallest accepted value.
    pub const MIN: u8 = 0;
    /// Largest accepted value.
    pub const MAX: u8 = 255;
    /// Default weight.
    pub const DEFAULT: u8 = 100;

    /// Create a transparency level, clamping into `0..=255`.
    #[inline]
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// The raw value.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Transparency {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
