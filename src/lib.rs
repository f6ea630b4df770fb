//! Neon Mondrian
//!
//! Recolors photographs into a three-hue palette over a random background.
//! The pixel work lives in the `mondrian-recolor` crate; this library adds
//! PNG I/O, configuration, the live studio service and its HTTP API, and is
//! exposed for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
