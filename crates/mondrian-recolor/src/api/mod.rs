//! Public API for the mondrian-recolor crate.
//!
//! This module provides the high-level API: the [`Session`] trigger contract
//! and the [`RecolorError`] unified error type.

mod error;
mod session;

pub use error::RecolorError;
pub use session::Session;
