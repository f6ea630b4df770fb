//! Test fixtures and constants.

use mondrian_recolor::{Compositor, SourceImage};
use neon_mondrian::models::{AppConfig, SubstitutesConfig};

/// Frame bytes for the scenario image with the scenario config
pub const SCENARIO_RECOLORED: [u8; 8] = [0, 255, 0, 255, 125, 125, 125, 255];

/// Frame bytes for the scenario image after reset
pub const SCENARIO_RESET: [u8; 8] = [255, 0, 0, 255, 10, 10, 10, 255];

/// 2x1 image: pure red, then dark grey
pub fn scenario_source() -> SourceImage {
    SourceImage::from_rgb(2, 1, &[255, 0, 0, 10, 10, 10]).unwrap()
}

/// Red substituted by green, fixed grey background, default levels
pub fn scenario_config() -> AppConfig {
    AppConfig {
        substitutes: SubstitutesConfig {
            red: "#00ff00".to_string(),
            ..SubstitutesConfig::default()
        },
        background: Some("#c8c8c8".to_string()),
        seed: Some(1),
        ..AppConfig::default()
    }
}

/// A 4x4 photo-like image covering all three references and some greys
pub fn mixed_source() -> SourceImage {
    let mut rgb = Vec::new();
    for i in 0..16u8 {
        let px = match i % 4 {
            0 => [250, 20, 10],
            1 => [240, 235, 30],
            2 => [15, 25, 220],
            _ => [i * 10, i * 10, i * 10],
        };
        rgb.extend_from_slice(&px);
    }
    SourceImage::from_rgb(4, 4, &rgb).unwrap()
}

/// Encode a source image as PNG bytes
pub fn png_bytes(source: &SourceImage) -> Vec<u8> {
    neon_mondrian::rendering::encode_png(&Compositor::reset(source)).unwrap()
}
