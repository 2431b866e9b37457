//! Bubble outline construction.
//!
//! One routine builds the right-pointing (or arrowless) outline; the left
//! variant is its horizontal mirror.

use std::f32::consts::{FRAC_PI_2, PI};

use super::{OutlinePath, Point};
use crate::widget::{ArrowSide, BubbleStyle};

/// Geometry parameters of a bubble outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineBuilder {
    pub corner_radius: f32,
    pub stroke_width: f32,
    pub arrow_width: f32,
    pub arrow_height: f32,
    pub arrow_margin_top: f32,
    pub side: ArrowSide,
}

impl OutlineBuilder {
    pub fn from_style(style: &BubbleStyle, side: ArrowSide) -> Self {
        Self {
            corner_radius: style.corner_radius,
            stroke_width: style.stroke_width,
            arrow_width: style.arrow_width,
            arrow_height: style.arrow_height,
            arrow_margin_top: style.arrow_margin_top,
            side,
        }
    }

    /// Build a fresh outline for a `width` x `height` body box.
    pub fn build(&self, width: f32, height: f32) -> OutlinePath {
        let mut path = OutlinePath::with_capacity(16);
        self.build_into(&mut path, width, height);
        path
    }

    /// Rebuild `path` in place. The arrow, if any, protrudes `arrow_width`
    /// beyond the body box on its side.
    pub fn build_into(&self, path: &mut OutlinePath, width: f32, height: f32) {
        path.reset();
        self.trace_right(path, width, height, self.side != ArrowSide::None);
        if self.side == ArrowSide::Left {
            path.mirror(width);
        }
    }

    /// Clockwise outline starting just past the top-left corner, with the
    /// optional notch cut into the right edge.
    fn trace_right(&self, path: &mut OutlinePath, w: f32, h: f32, notch: bool) {
        // Stroke is centered on the boundary: its outer edge touches the box.
        let s = 0.5 * self.stroke_width;
        let r = (self.corner_radius - s).max(0.0);
        let (left, top, right, bottom) = (s, s, w - s, h - s);

        path.move_to(Point::new(left + r, top));
        path.line_to(Point::new(right - r, top));
        path.arc_to(
            Point::new(right - r, top + r),
            r,
            -FRAC_PI_2,
            FRAC_PI_2,
            Point::new(right, top + r),
        );

        if notch {
            let m = self.arrow_margin_top;
            path.line_to(Point::new(right, m));
            path.line_to(Point::new(right + self.arrow_width, m + 0.5 * self.arrow_height));
            path.line_to(Point::new(right, m + self.arrow_height));
        }

        path.line_to(Point::new(right, bottom - r));
        path.arc_to(
            Point::new(right - r, bottom - r),
            r,
            0.0,
            FRAC_PI_2,
            Point::new(right - r, bottom),
        );
        path.line_to(Point::new(left + r, bottom));
        path.arc_to(
            Point::new(left + r, bottom - r),
            r,
            FRAC_PI_2,
            FRAC_PI_2,
            Point::new(left, bottom - r),
        );
        path.line_to(Point::new(left, top + r));
        path.arc_to(
            Point::new(left + r, top + r),
            r,
            PI,
            FRAC_PI_2,
            Point::new(left + r, top),
        );
        path.close();
    }
}

/// Build the outline of a `width` x `height` bubble body.
pub fn build_outline(width: f32, height: f32, style: &BubbleStyle, side: ArrowSide) -> OutlinePath {
    OutlineBuilder::from_style(style, side).build(width, height)
}

/// Same as [`build_outline`] but reuses an existing buffer.
pub fn build_outline_into(
    path: &mut OutlinePath,
    width: f32,
    height: f32,
    style: &BubbleStyle,
    side: ArrowSide,
) {
    OutlineBuilder::from_style(style, side).build_into(path, width, height);
}
