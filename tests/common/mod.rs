//! Shared test helpers.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use speech_bubble::{ArrowSide, BubbleStyle, Color};

pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// 10px corners, 2px stroke, 16x12 arrow 20px from the top. Blue when idle,
/// red when pressed.
#[allow(dead_code)]
pub fn sample_style(side: ArrowSide) -> BubbleStyle {
    BubbleStyle {
        corner_radius: 10.0,
        shadow_radius: 10.0,
        stroke_width: 2.0,
        arrow_width: 16.0,
        arrow_height: 12.0,
        arrow_margin_top: 20.0,
        stroke_color_normal: BLUE,
        stroke_color_pressed: RED,
        arrow_side: side,
    }
}

/// Write `xml` into `dir` and return the file path.
#[allow(dead_code)]
pub fn write_layout(dir: &Path, xml: &str) -> PathBuf {
    let path = dir.join("layout.xml");
    std::fs::write(&path, xml).expect("write layout");
    path
}

#[allow(dead_code)]
pub fn pixel(image: &RgbaImage, x: u32, y: u32) -> [u8; 4] {
    image.get_pixel(x, y).0
}

/// Assert two floats are within `1e-4`.
#[allow(dead_code)]
pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}
