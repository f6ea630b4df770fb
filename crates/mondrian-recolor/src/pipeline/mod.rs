//! The recoloring pipeline
//!
//! Three pure stages, applied per pixel:
//!
//! 1. [`classify`]: reference hue within threshold, or none
//! 2. [`resolve`]: substitute for a match, background blend otherwise
//! 3. [`Compositor`]: runs 1 and 2 over every pixel and assembles a frame

mod classify;
mod compositor;
mod resolve;

pub use classify::{classify, classify_against};
pub use compositor::{shade_pixel, Compositor};
pub use resolve::resolve;
