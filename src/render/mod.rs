//! Painting bubble outlines.

mod paint;
pub mod software;

pub use paint::{
    configure_paint, BlurMask, LineCap, LineJoin, PaintPass, PaintSpec, PaintStyle,
};
pub use software::SoftwareSurface;

use crate::geometry::OutlinePath;

/// Something a bubble outline can be painted onto.
///
/// [`crate::widget::BubbleFrame::draw`] calls this once per paint pass.
pub trait Surface {
    fn draw_outline(&mut self, outline: &OutlinePath, spec: &PaintSpec, pass: &PaintPass);
}
