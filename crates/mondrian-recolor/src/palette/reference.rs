//! The three fixed reference hues.

use std::fmt;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Rgb;

/// One of the three canonical hues a pixel can be classified as.
///
/// Declaration order is the classification priority: a pixel within range
/// of several references is assigned to the earliest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Reference {
    Red,
    Yellow,
    Blue,
}

impl Reference {
    /// All references in priority order.
    pub const PRIORITY: [Reference; 3] = [Reference::Red, Reference::Yellow, Reference::Blue];

    /// The canonical color this reference stands for.
    #[inline]
    pub const fn color(self) -> Rgb {
        match self {
            Reference::Red => Rgb::new(255, 0, 0),
            Reference::Yellow => Rgb::new(255, 255, 0),
            Reference::Blue => Rgb::new(0, 0, 255),
        }
    }

    /// Position in [`Reference::PRIORITY`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as used in configuration and the HTTP API.
    pub const fn name(self) -> &'static str {
        match self {
            Reference::Red => "red",
            Reference::Yellow => "yellow",
            Reference::Blue => "blue",
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Reference {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Reference::Red),
            "yellow" => Ok(Reference::Yellow),
            "blue" => Ok(Reference::Blue),
            _ => Err(PaletteError::UnknownReference(s.to_string())),
        }
    }
}
