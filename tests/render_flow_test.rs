//! End-to-end tests for the file based render flow: config file, PNG in,
//! recolored PNG out.

mod common;

use common::fixtures;
use mondrian_recolor::{ImageError, Reference, Rgb};
use neon_mondrian::error::RenderError;
use neon_mondrian::models::{AppConfig, ParamsUpdate};
use neon_mondrian::rendering::{decode_png, recolor_png};
use neon_mondrian::services::BackgroundGenerator;
use pretty_assertions::assert_eq;

#[test]
fn test_render_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    std::fs::write(
        &config_path,
        r##"
substitutes:
  red: "#00ff00"
background: "#c8c8c8"
threshold: 80
transparency: 100
"##,
    )
    .unwrap();

    let input_path = dir.path().join("in.png");
    std::fs::write(&input_path, fixtures::png_bytes(&fixtures::scenario_source())).unwrap();

    let config = AppConfig::load(Some(&config_path));
    let background = config.fixed_background().unwrap().unwrap();
    let snapshot = config.base_snapshot(background).unwrap();

    let input = std::fs::read(&input_path).unwrap();
    let output = recolor_png(&input, &snapshot, None, false).unwrap();

    let output_path = dir.path().join(&config.output);
    std::fs::write(&output_path, &output).unwrap();

    let written = decode_png(&std::fs::read(&output_path).unwrap()).unwrap();
    assert_eq!(written.rgba(), &fixtures::SCENARIO_RECOLORED);
}

#[test]
fn test_cli_overrides_win_over_config() {
    let config = fixtures::scenario_config();
    let overrides = ParamsUpdate {
        red: Some("#ff00ff".to_string()),
        transparency: Some(255),
        ..Default::default()
    };
    let snapshot = overrides
        .apply(config.base_snapshot(Rgb::new(0, 0, 0)).unwrap())
        .unwrap();

    let png = fixtures::png_bytes(&fixtures::scenario_source());
    let out = decode_png(&recolor_png(&png, &snapshot, None, false).unwrap()).unwrap();
    assert_eq!(out.rgba(), &[255, 0, 255, 255, 10, 10, 10, 255]);
}

#[test]
fn test_seeded_renders_are_reproducible() {
    let png = fixtures::png_bytes(&fixtures::mixed_source());
    let config = AppConfig::default();

    let render = |seed| {
        let background = BackgroundGenerator::seeded(seed).next_color();
        let snapshot = config.base_snapshot(background).unwrap();
        recolor_png(&png, &snapshot, None, false).unwrap()
    };

    assert_eq!(render(11), render(11));
}

#[test]
fn test_render_with_resize_and_reset() {
    let png = fixtures::png_bytes(&fixtures::mixed_source());
    let snapshot = AppConfig::default()
        .base_snapshot(Rgb::new(0, 0, 0))
        .unwrap();

    let out = decode_png(&recolor_png(&png, &snapshot, Some(8), true).unwrap()).unwrap();
    assert_eq!((out.width(), out.height()), (8, 8));

    // Top-left 2x2 block is the upscaled first source pixel, untouched
    for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        assert_eq!(out.pixel(x, y), Rgb::new(250, 20, 10));
    }
}

#[test]
fn test_mixed_image_substitutes_every_reference() {
    let png = fixtures::png_bytes(&fixtures::mixed_source());
    let neon = [
        Rgb::new(57, 255, 20),
        Rgb::new(255, 110, 199),
        Rgb::new(0, 255, 255),
    ];
    let mut snapshot = AppConfig::default()
        .base_snapshot(Rgb::new(30, 0, 60))
        .unwrap();
    for (reference, color) in Reference::PRIORITY.into_iter().zip(neon) {
        snapshot = snapshot.substitute(reference, color);
    }

    let out = decode_png(&recolor_png(&png, &snapshot, None, false).unwrap()).unwrap();
    assert_eq!(out.pixel(0, 0), neon[0]);
    assert_eq!(out.pixel(1, 0), neon[1]);
    assert_eq!(out.pixel(2, 0), neon[2]);
}

#[test]
fn test_oversized_resize_height_is_an_error() {
    let png = fixtures::png_bytes(&fixtures::scenario_source());
    let snapshot = AppConfig::default()
        .base_snapshot(Rgb::new(0, 0, 0))
        .unwrap();

    let result = recolor_png(&png, &snapshot, Some(u32::MAX), false);
    assert!(matches!(
        result,
        Err(RenderError::Image(ImageError::TooLarge { .. }))
    ));
}

#[test]
fn test_garbage_input_is_an_error() {
    let snapshot = AppConfig::default()
        .base_snapshot(Rgb::new(0, 0, 0))
        .unwrap();
    assert!(recolor_png(b"not a png", &snapshot, None, false).is_err());
}
