//! Error types for palette operations

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for substitute palette construction.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// Substitute list does not have exactly one color per reference
    WrongCount {
        /// Number of colors supplied
        actual: usize,
    },
    /// Unknown reference color name
    UnknownReference(String),
    /// Invalid hex color string
    ParseColor(ParseColorError),
}

impl From<ParseColorError> for PaletteError {
    fn from(err: ParseColorError) -> Self {
        PaletteError::ParseColor(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::WrongCount { actual } => {
                write!(f, "expected 3 substitute colors, got {}", actual)
            }
            PaletteError::UnknownReference(name) => {
                write!(
                    f,
                    "unknown reference color '{}' (expected red, yellow or blue)",
                    name
                )
            }
            PaletteError::ParseColor(err) => {
                write!(f, "invalid color: {}", err)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            PaletteError::WrongCount { actual: 2 }.to_string(),
            "expected 3 substitute colors, got 2"
        );
        assert_eq!(
            PaletteError::from(ParseColorError::InvalidLength).to_string(),
            "invalid color: invalid hex color length (expected 3 or 6 characters)"
        );
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let err = PaletteError::from(ParseColorError::InvalidLength);
        assert!(err.source().is_some());
        assert!(PaletteError::WrongCount { actual: 0 }.source().is_none());
    }
}
