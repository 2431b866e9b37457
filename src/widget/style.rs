//! Bubble appearance: colors, arrow side and geometry constants.

use crate::error::{Error, Result};

/// RGBA color value (straight alpha, 0.0 - 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Parse `#RGB`, `#ARGB`, `#RRGGBB` or `#AARRGGBB` (alpha first).
    pub fn from_hex(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let (a, r, g, b) = match hex.len() {
            3 => (Ok(255), nibble(0), nibble(1), nibble(2)),
            4 => (nibble(0), nibble(1), nibble(2), nibble(3)),
            6 => (Ok(255), byte(0), byte(2), byte(4)),
            8 => (byte(0), byte(2), byte(4), byte(6)),
            _ => return Err(invalid()),
        };
        match (a, r, g, b) {
            (Ok(a), Ok(r), Ok(g), Ok(b)) => Ok(Self::from_rgba8(r, g, b, a)),
            _ => Err(invalid()),
        }
    }
}

/// Which vertical edge carries the arrow notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub enum ArrowSide {
    #[default]
    None,
    Left,
    Right,
}

impl ArrowSide {
    /// Resolve the two boolean flags. Right wins when both are set.
    pub fn from_flags(right: bool, left: bool) -> Self {
        if right {
            Self::Right
        } else if left {
            Self::Left
        } else {
            Self::None
        }
    }
}

/// Default geometry, in density-independent units.
pub mod defaults {
    pub const CORNER_RADIUS_DP: f32 = 5.0;
    pub const SHADOW_RADIUS_DP: f32 = 10.0;
    pub const STROKE_WIDTH_DP: f32 = 1.5;
    pub const ARROW_WIDTH_DP: f32 = 8.0;
    pub const ARROW_HEIGHT_DP: f32 = 6.0;
}

/// Immutable per-widget appearance, fixed at construction. Lengths are in pixels.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct BubbleStyle {
    pub corner_radius: f32,
    /// Blur extent of the inner shadow.
    pub shadow_radius: f32,
    pub stroke_width: f32,
    pub arrow_width: f32,
    pub arrow_height: f32,
    pub arrow_margin_top: f32,
    pub stroke_color_normal: Color,
    pub stroke_color_pressed: Color,
    pub arrow_side: ArrowSide,
}

impl Default for BubbleStyle {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}

impl BubbleStyle {
    /// Defaults scaled for a display with `density` pixels per dp.
    pub fn with_density(density: f32) -> Self {
        Self {
            corner_radius: defaults::CORNER_RADIUS_DP * density,
            shadow_radius: defaults::SHADOW_RADIUS_DP * density,
            stroke_width: defaults::STROKE_WIDTH_DP * density,
            arrow_width: defaults::ARROW_WIDTH_DP * density,
            arrow_height: defaults::ARROW_HEIGHT_DP * density,
            arrow_margin_top: 0.0,
            stroke_color_normal: Color::BLACK,
            stroke_color_pressed: Color::BLACK,
            arrow_side: ArrowSide::None,
        }
    }

    /// Width reserved next to the body for the arrow (zero without an arrow).
    pub fn arrow_reserve(&self) -> f32 {
        match self.arrow_side {
            ArrowSide::None => 0.0,
            ArrowSide::Left | ArrowSide::Right => self.arrow_width,
        }
    }
}

/// Inner padding of a container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub const fn all(v: f32) -> Self {
        Self { left: v, top: v, right: v, bottom: v }
    }
}
