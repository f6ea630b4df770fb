//! Color types and per-channel utilities
//!
//! - [`Rgb`]: 8-bit color triple with hex parsing
//! - [`channel_distance`] / [`within_threshold`]: the classification metric
//! - [`blend`]: proportional blend toward a background color
//!
//! # Example
//!
//! ```
//! use mondrian_recolor::{within_threshold, Rgb};
//!
//! let pixel = Rgb::new(240, 20, 10);
//! let red = Rgb::new(255, 0, 0);
//! assert!(within_threshold(pixel, red, 80));
//! ```

mod blend;
mod distance;
mod rgb;

pub use blend::blend;
pub use distance::{channel_distance, max_channel_distance, within_threshold};
pub use rgb::Rgb;
