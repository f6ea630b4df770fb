//! User-assigned substitute colors, one per reference.

use std::ops::Index;

use super::error::PaletteError;
use super::reference::Reference;
use crate::color::Rgb;

/// The substitute color bound to each [`Reference`].
///
/// Defaults to the reference hues themselves, so an untouched palette
/// replaces matched pixels with pure red, yellow and blue.
///
/// # Example
///
/// ```
/// use mondrian_recolor::{Reference, Rgb, Substitutes};
///
/// let subs = Substitutes::default().with(Reference::Red, Rgb::new(0, 255, 0));
/// assert_eq!(subs[Reference::Red], Rgb::new(0, 255, 0));
/// assert_eq!(subs[Reference::Blue], Rgb::new(0, 0, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitutes {
    colors: [Rgb; 3],
}

impl Substitutes {
    /// Create from colors in priority order (red, yellow, blue).
    #[inline]
    pub const fn new(red: Rgb, yellow: Rgb, blue: Rgb) -> Self {
        Self {
            colors: [red, yellow, blue],
        }
    }

    /// Parse from hex strings in priority order.
    ///
    /// # Errors
    ///
    /// [`PaletteError::WrongCount`] unless exactly three strings are given,
    /// [`PaletteError::ParseColor`] if any fails to parse.
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Result<Self, PaletteError> {
        if hex.len() != 3 {
            return Err(PaletteError::WrongCount { actual: hex.len() });
        }
        let mut colors = [Rgb::default(); 3];
        for (slot, s) in colors.iter_mut().zip(hex) {
            *slot = s.as_ref().parse()?;
        }
        Ok(Self { colors })
    }

    /// Substitute for `reference`.
    #[inline]
    pub fn get(&self, reference: Reference) -> Rgb {
        self.colors[reference.index()]
    }

    /// Replace the substitute for `reference`.
    #[inline]
    pub fn set(&mut self, reference: Reference, color: Rgb) {
        self.colors[reference.index()] = color;
    }

    /// Builder-style [`set`](Self::set).
    #[inline]
    pub fn with(mut self, reference: Reference, color: Rgb) -> Self {
        self.set(reference, color);
        self
    }

    /// Iterate `(reference, substitute)` in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Reference, Rgb)> + '_ {
        Reference::PRIORITY.iter().map(|&r| (r, self.get(r)))
    }
}

impl Default for Substitutes {
    fn default() -> Self {
        Self::new(
            Reference::Red.color(),
            Reference::Yellow.color(),
            Reference::Blue.color(),
        )
    }
}

impl Index<Reference> for Substitutes {
    type Output = Rgb;

    fn index(&self, reference: Reference) -> &Rgb {
        &self.colors[reference.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ParseColorError;

    #[test]
    fn test_default_is_reference_hues() {
        let subs = Substitutes::default();
        for r in Reference::PRIORITY {
            assert_eq!(subs.get(r), r.color());
        }
    }

    #[test]
    fn test_set_touches_only_one_slot() {
        let mut subs = Substitutes::default();
        subs.set(Reference::Yellow, Rgb::new(1, 2, 3));
        assert_eq!(subs[Reference::Red], Reference::Red.color());
        assert_eq!(subs[Reference::Yellow], Rgb::new(1, 2, 3));
        assert_eq!(subs[Reference::Blue], Reference::Blue.color());
    }

    #[test]
    fn test_from_hex() {
        let subs = Substitutes::from_hex(&["#00ff00", "#f0f", "000000"]).unwrap();
        assert_eq!(subs[Reference::Red], Rgb::new(0, 255, 0));
        assert_eq!(subs[Reference::Yellow], Rgb::new(255, 0, 255));
        assert_eq!(subs[Reference::Blue], Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_from_hex_errors() {
        assert_eq!(
            Substitutes::from_hex(&["#fff", "#000"]),
            Err(PaletteError::WrongCount { actual: 2 })
        );
        assert_eq!(
            Substitutes::from_hex(&["#fff", "#000", "#12"]),
            Err(PaletteError::ParseColor(ParseColorError::InvalidLength))
        );
    }

    #[test]
    fn test_iter_in_priority_order() {
        let order: Vec<Reference> = Substitutes::default().iter().map(|(r, _)| r).collect();
        assert_eq!(order, Reference::PRIORITY.to_vec());
    }
}
