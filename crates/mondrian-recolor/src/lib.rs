//! mondrian-recolor: reference-color recoloring for photographs
//!
//! Every pixel of a source image is compared against three fixed reference
//! hues (red, yellow, blue). A pixel close enough to one of them is replaced
//! by that hue's user-chosen substitute; every other pixel is blended toward a
//! background color.
//!
//! # Quick Start
//!
//! ```
//! use mondrian_recolor::{Compositor, Reference, Rgb, Snapshot, SourceImage};
//!
//! let source = SourceImage::from_rgb(2, 1, &[255, 0, 0, 10, 10, 10]).unwrap();
//! let snapshot = Snapshot::new(Rgb::new(200, 200, 200))
//!     .substitute(Reference::Red, Rgb::new(0, 255, 0))
//!     .threshold(80)
//!     .transparency(100);
//!
//! let frame = Compositor::recompute(&source, &snapshot);
//! assert_eq!(frame.pixel(0, 0), Some([0, 255, 0, 255]));
//! assert_eq!(frame.pixel(1, 0), Some([125, 125, 125, 255]));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! source pixel (RGBA, alpha ignored)
//!     |
//!     v
//! classify()   red? yellow? blue? (first match, |dc| < threshold per channel)
//!     |
//!     +-- Some(ref) --> substitutes[ref]
//!     |
//!     +-- None -------> blend(src, background, transparency)
//!     |
//!     v
//! frame pixel (RGB, alpha = 255)
//! ```
//!
//! # Parameters
//!
//! | Parameter | Range | Default | Notes |
//! |-----------|-------|---------|-------|
//! | [`Threshold`] | 0..=150 | 80 | strict per-channel tolerance; 0 matches nothing |
//! | [`Transparency`] | 0..=255 | 100 | weight of the *source* pixel in the blend |
//! | [`Substitutes`] | 3 colors | reference hues | one per [`Reference`] |
//! | background | any RGB | chosen by caller | blend target |
//!
//! Out-of-range integers are clamped, never rejected.
//!
//! # Blend Arithmetic
//!
//! Unmatched pixels use
//!
//! ```text
//! out = (src * t + bg * (255 - t) + 127) / 255
//! ```
//!
//! in integer arithmetic: round half up, then clamp to `0..=255`. `t = 255`
//! is the identity and `t = 0` yields the background exactly. The name
//! "transparency" is historical; it behaves as the source's opacity.
//!
//! # Passes
//!
//! [`Compositor::recompute`] and [`Compositor::reset`] are pure functions
//! of their inputs. [`Session`] keeps the last published [`Frame`] and swaps
//! it only once a pass has completed. Enable the `parallel` feature to
//! spread rows over the rayon pool.

pub mod api;
pub mod color;
pub mod image;
pub mod palette;
pub mod params;
pub mod pipeline;


pub use api::{RecolorError, Session};
pub use color::{blend, channel_distance, max_channel_distance, within_threshold, Rgb};
pub use image::{Frame, ImageError, SourceImage, RGBA_CHANNELS};
pub use palette::{PaletteError, ParseColorError, Reference, Substitutes};
pub use params::{Snapshot, Threshold, Transparency};
pub use pipeline::{classify, classify_against, resolve, shade_pixel, Compositor};
