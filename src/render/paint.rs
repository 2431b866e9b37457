//! Paint parameters for the two bubble passes.

use crate::widget::{BubbleStyle, Color, InteractionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

/// Which parts of the outline a pass covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum PaintStyle {
    Fill,
    Stroke,
    /// Interior plus the stroke band around the outline.
    FillAndStroke,
}

/// Gaussian blur applied to a pass, kept inside the painted shape: the
/// interior fades in from the edge and nothing spills outside.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct BlurMask {
    pub radius: f32,
}

impl BlurMask {
    /// Gaussian sigma for a blur radius (same conversion Skia uses).
    pub fn sigma(&self) -> f32 {
        0.57735 * self.radius + 0.5
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PaintPass {
    pub style: PaintStyle,
    pub color: Color,
    pub mask: Option<BlurMask>,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PaintSpec {
    pub anti_alias: bool,
    pub line_join: LineJoin,
    pub line_cap: LineCap,
    pub stroke_width: f32,
    pub passes: [PaintPass; 2],
}

/// Paint for one frame: a soft inner-shadow fill in the state color, then a
/// border stroke.
///
/// The border stroke always uses the pressed color, whatever the state. Only
/// the fill pass follows the press state.
pub fn configure_paint(state: &InteractionState, style: &BubbleStyle) -> PaintSpec {
    let fill_color = if state.is_pressed() {
        style.stroke_color_pressed
    } else {
        style.stroke_color_normal
    };
    let mask = (style.shadow_radius > 0.0).then_some(BlurMask { radius: style.shadow_radius });

    PaintSpec {
        anti_alias: true,
        line_join: LineJoin::Round,
        line_cap: LineCap::Round,
        stroke_width: style.stroke_width,
        passes: [
            PaintPass { style: PaintStyle::FillAndStroke, color: fill_color, mask },
            PaintPass {
                style: PaintStyle::Stroke,
                color: style.stroke_color_pressed,
                mask: None,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::PointerEvent;

    fn style() -> BubbleStyle {
        BubbleStyle {
            stroke_color_normal: Color::rgb(0.0, 0.0, 1.0),
            stroke_color_pressed: Color::rgb(1.0, 0.0, 0.0),
            ..BubbleStyle::with_density(1.0)
        }
    }

    #[test]
    fn idle_fill_uses_normal_color() {
        let spec = configure_paint(&InteractionState::new(), &style());
        assert_eq!(spec.passes[0].color, Color::rgb(0.0, 0.0, 1.0));
        assert_eq!(spec.passes[0].style, PaintStyle::FillAndStroke);
        assert_eq!(spec.passes[0].mask, Some(BlurMask { radius: 10.0 }));
        assert_eq!(spec.passes[1].color, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(spec.passes[1].mask, None);
        assert!(spec.anti_alias);
        assert_eq!((spec.line_join, spec.line_cap), (LineJoin::Round, LineCap::Round));
    }

    #[test]
    fn pressed_fill_uses_pressed_color() {
        let mut state = InteractionState::new();
        state.handle(&PointerEvent::Down { x: 0.0, y: 0.0 }, true);
        let spec = configure_paint(&state, &style());
        assert_eq!(spec.passes[0].color, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(spec.passes[1].color, Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn zero_shadow_radius_has_no_mask() {
        let style = BubbleStyle { shadow_radius: 0.0, ..style() };
        let spec = configure_paint(&InteractionState::new(), &style);
        assert!(spec.passes[0].mask.is_none());
    }
}
