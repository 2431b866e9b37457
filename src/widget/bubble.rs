//! The bubble container: style + press state + per-instance outline buffer.

use super::interaction::{InteractionState, PointerEvent};
use super::style::{ArrowSide, BubbleStyle, Padding};
use crate::geometry::{OutlineBuilder, OutlinePath, Rect};
use crate::render::{configure_paint, PaintSpec, Surface};

/// A container that paints itself as a speech bubble behind its content.
#[derive(Debug, Clone)]
pub struct BubbleFrame {
    style: BubbleStyle,
    interaction: InteractionState,
    /// Scratch outline, rebuilt on every paint pass.
    outline: OutlinePath,
    redraw_pending: bool,
}

impl BubbleFrame {
    pub fn new(style: BubbleStyle) -> Self {
        Self {
            style,
            interaction: InteractionState::new(),
            outline: OutlinePath::with_capacity(16),
            redraw_pending: false,
        }
    }

    pub fn style(&self) -> &BubbleStyle {
        &self.style
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn is_pressed(&self) -> bool {
        self.interaction.is_pressed()
    }

    /// Only bubbles with an arrow paint a background.
    pub fn paints_background(&self) -> bool {
        self.style.arrow_side != ArrowSide::None
    }

    /// Padding for child content: the arrow side grows by the arrow width so
    /// children never render under the arrow.
    pub fn content_padding(&self, base: Padding) -> Padding {
        match self.style.arrow_side {
            ArrowSide::Right => Padding { right: base.right + self.style.arrow_width, ..base },
            ArrowSide::Left => Padding { left: base.left + self.style.arrow_width, ..base },
            ArrowSide::None => base,
        }
    }

    /// Bubble body inside a frame of the given size, leaving room for the arrow.
    pub fn body_rect(&self, frame_width: f32, frame_height: f32) -> Rect {
        let reserve = self.style.arrow_reserve();
        let x = if self.style.arrow_side == ArrowSide::Left { reserve } else { 0.0 };
        Rect::new(x, 0.0, frame_width - reserve, frame_height)
    }

    /// Rebuild the outline for a frame of the given size, in frame coordinates.
    pub fn outline(&mut self, frame_width: f32, frame_height: f32) -> &OutlinePath {
        let body = self.body_rect(frame_width, frame_height);
        let builder = OutlineBuilder::from_style(&self.style, self.style.arrow_side);
        builder.build_into(&mut self.outline, body.width, body.height);
        if body.x != 0.0 {
            self.outline.translate(body.x, body.y);
        }
        &self.outline
    }

    pub fn paint_spec(&self) -> PaintSpec {
        configure_paint(&self.interaction, &self.style)
    }

    /// Paint the bubble background onto `surface`. Called once per frame,
    /// before child content.
    pub fn draw<S: Surface>(&mut self, frame_width: f32, frame_height: f32, surface: &mut S) {
        if !self.paints_background() {
            return;
        }
        let spec = self.paint_spec();
        let outline = self.outline(frame_width, frame_height);
        for pass in &spec.passes {
            surface.draw_outline(outline, &spec, pass);
        }
    }

    /// Update the press state from `event`, then hand the event unchanged to
    /// `default_handler` and return its verdict.
    pub fn dispatch_pointer<F>(
        &mut self,
        event: &PointerEvent,
        frame_width: f32,
        frame_height: f32,
        default_handler: F,
    ) -> bool
    where
        F: FnOnce(&PointerEvent) -> bool,
    {
        let inside = match *event {
            PointerEvent::Down { x, y } => {
                Rect::new(0.0, 0.0, frame_width, frame_height).contains(x, y)
            }
            _ => false,
        };
        if self.interaction.handle(event, inside).redraw {
            tracing::debug!(state = ?self.interaction.state(), "bubble redraw requested");
            self.redraw_pending = true;
        }
        default_handler(event)
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_pending)
    }
}
