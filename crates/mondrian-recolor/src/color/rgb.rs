//! 8-bit RGB color type
//!
//! All pipeline arithmetic happens directly on 8-bit channel values; there is
//! no gamma decoding or alternate color space.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// An 8-bit RGB color.
///
/// Used for reference colors, substitutes, the background color and the
/// RGB part of source pixels. Alpha, where an input carries one, is dropped
/// on conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new color from channel values.
    ///
    /// # Example
    /// ```
    /// use mondrian_recolor::Rgb;
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(red.r, 255);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Create a color from an RGBA quadruple, ignoring alpha.
    #[inline]
    pub const fn from_rgba(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to a byte array [R, G, B, A] with the given alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> [u8; 4] {
        [self.r, self.g, self.b, alpha]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    /// Formats as lowercase `#rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`. Parsing is
    /// case-insensitive and surrounding whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use mondrian_recolor::Rgb;
    ///
    /// let yellow: Rgb = "#FFFF00".parse().unwrap();
    /// assert_eq!(yellow, Rgb::new(255, 255, 0));
    ///
    /// let blue: Rgb = "00f".parse().unwrap();
    /// assert_eq!(blue, Rgb::new(0, 0, 255));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: 0xF -> 0xFF
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_agree() {
        let color = Rgb::new(12, 34, 56);
        assert_eq!(Rgb::from_bytes([12, 34, 56]), color);
        assert_eq!(Rgb::from_rgba([12, 34, 56, 7]), color);
        assert_eq!(Rgb::from((12, 34, 56)), color);
        assert_eq!(color.to_bytes(), [12, 34, 56]);
        assert_eq!(color.with_alpha(255), [12, 34, 56, 255]);
    }

    #[test]
    fn test_hex_parsing_6digit() {
        let red: Rgb = "#FF0000".parse().unwrap();
        assert_eq!(red, Rgb::new(255, 0, 0));

        let no_hash: Rgb = "0000ff".parse().unwrap();
        assert_eq!(no_hash, Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_hex_parsing_shorthand() {
        let color: Rgb = "#ABC".parse().unwrap();
        assert_eq!(color, Rgb::new(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert!(matches!(
            "#GGG".parse::<Rgb>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert!(matches!(
            "#FFFF".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength)
        ));
        assert!(matches!("".parse::<Rgb>(), Err(ParseColorError::InvalidLength)));
        assert!(matches!(
            "#ééé".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength)
        ));
    }

    #[test]
    fn test_hex_parsing_whitespace_and_case() {
        let upper: Rgb = "  #ABCDEF ".parse().unwrap();
        let lower: Rgb = "#abcdef".parse().unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Rgb::new(255, 160, 0).to_string(), "#ffa000");
        let parsed: Rgb = Rgb::new(1, 2, 3).to_string().parse().unwrap();
        assert_eq!(parsed, Rgb::new(1, 2, 3));
    }
}
