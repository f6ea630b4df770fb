pub mod png_codec;
pub mod resize;

pub use png_codec::{decode_png, encode_png, MAX_DIMENSION};
pub use resize::resize_to_height;

use crate::error::RenderError;
use mondrian_recolor::{Compositor, Snapshot, SourceImage};

/// Load a PNG and optionally fit it to `height`.
pub fn load_source(bytes: &[u8], height: Option<u32>) -> Result<SourceImage, RenderError> {
    let image = decode_png(bytes)?;
    match height {
        Some(h) => Ok(resize_to_height(&image, h)?),
        None => Ok(image),
    }
}

/// One-shot PNG to PNG pass used by the `render` command.
///
/// With `reset` set the frame is the (resized) source, otherwise a full
/// recompute with `snapshot`.
pub fn recolor_png(
    bytes: &[u8],
    snapshot: &Snapshot,
    height: Option<u32>,
    reset: bool,
) -> Result<Vec<u8>, RenderError> {
    let source = load_source(bytes, height)?;
    let frame = if reset {
        Compositor::reset(&source)
    } else {
        Compositor::recompute(&source, snapshot)
    };
    encode_png(&frame)
}
