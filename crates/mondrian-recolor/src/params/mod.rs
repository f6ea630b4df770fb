//! Pass parameters
//!
//! [`Threshold`] and [`Transparency`] clamp their inputs; [`Snapshot`]
//! bundles them with the substitutes and background for one pass.

mod levels;
mod snapshot;

pub use levels::{Threshold, Transparency};
pub use snapshot::Snapshot;
