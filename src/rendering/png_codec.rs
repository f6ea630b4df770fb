use crate::error::RenderError;
use mondrian_recolor::{Frame, SourceImage};
use std::io::Cursor;

/// Largest accepted width or height for decoded images.
pub const MAX_DIMENSION: u32 = 16_384;

/// Decode a PNG into an RGBA source image.
///
/// Palette, greyscale and low bit depth images are expanded to 8-bit;
/// 16-bit channels are stripped to their high byte. Images without an alpha
/// channel come back fully opaque.
pub fn decode_png(bytes: &[u8]) -> Result<SourceImage, RenderError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| RenderError::PngDecode(e.to_string()))?;

    // Checked from the header, before the frame buffer is allocated
    let (width, height) = (reader.info().width, reader.info().height);
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(RenderError::UnsupportedDimensions { width, height });
    }

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| RenderError::PngDecode(e.to_string()))?;

    if info.bit_depth != png::BitDepth::Eight {
        return Err(RenderError::UnsupportedFormat(format!(
            "bit depth {:?} after expansion",
            info.bit_depth
        )));
    }

    let data = &buf[..info.buffer_size()];
    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => data.to_vec(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::Indexed => {
            return Err(RenderError::UnsupportedFormat(
                "indexed color was not expanded".to_string(),
            ))
        }
    };

    tracing::debug!(
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        "Decoded PNG"
    );

    Ok(SourceImage::from_rgba(info.width, info.height, rgba)?)
}

/// Encode a frame as an 8-bit RGBA PNG.
///
/// PNG cannot represent an empty image, so a frame with no pixels is
/// reported as [`RenderError::UnsupportedDimensions`].
pub fn encode_png(frame: &Frame) -> Result<Vec<u8>, RenderError> {
    if frame.is_empty() {
        return Err(RenderError::UnsupportedDimensions {
            width: frame.width(),
            height: frame.height(),
        });
    }

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, frame.width(), frame.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(frame.rgba())
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
