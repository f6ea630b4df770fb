//! Pixel buffers
//!
//! - [`SourceImage`]: immutable RGBA original, shared behind an `Arc`
//! - [`Frame`]: the opaque RGBA working buffer a pass produces

mod error;
mod frame;
mod source;

pub use error::ImageError;
pub use frame::Frame;
pub use source::{SourceImage, RGBA_CHANNELS};
