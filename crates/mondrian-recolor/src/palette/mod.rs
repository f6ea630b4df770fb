//! Reference hues and their substitutes
//!
//! This module provides the fixed [`Reference`] set, the user-assigned
//! [`Substitutes`], and the error types for parsing and validation.

mod error;
mod reference;
mod substitutes;

pub use error::{PaletteError, ParseColorError};
pub use reference::Reference;
pub use substitutes::Substitutes;
