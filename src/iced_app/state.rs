//! Placed bubbles and canvas messages.

use std::cell::RefCell;

use iced::{Point, Rectangle, Size};

use crate::render::Surface;
use crate::widget::{BubbleFrame, Padding, PointerEvent};
use crate::xml::BubbleDecl;

/// Canvas-specific messages.
#[derive(Debug, Clone)]
pub enum CanvasMessage {
    MouseMove(Point),
    MouseDown(Point),
    MouseUp(Point),
    /// The pointer gesture was aborted (cursor left the canvas).
    Cancel,
}

/// Inner padding of every bubble before the arrow reserve is added.
pub const BASE_PADDING: Padding = Padding::all(8.0);

/// A bubble frame positioned on the canvas.
///
/// The canvas draws through `&App`, so the frame sits in a `RefCell` and its
/// scratch outline is rebuilt in place on every paint.
#[derive(Debug, Clone)]
pub struct PlacedBubble {
    pub name: Option<String>,
    pub text: Option<String>,
    pub bounds: Rectangle,
    frame: RefCell<BubbleFrame>,
}

impl PlacedBubble {
    pub fn from_decl(decl: &BubbleDecl) -> Self {
        Self {
            name: decl.name.clone(),
            text: decl.text.clone(),
            bounds: Rectangle::new(
                Point::new(decl.rect.x, decl.rect.y),
                Size::new(decl.rect.width, decl.rect.height),
            ),
            frame: RefCell::new(BubbleFrame::new(decl.style)),
        }
    }

    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }

    /// Canvas position translated into this bubble's local coordinates.
    pub fn local(&self, pos: Point) -> Point {
        Point::new(pos.x - self.bounds.x, pos.y - self.bounds.y)
    }

    /// Where child content starts, after padding.
    pub fn content_origin(&self) -> Point {
        let padding = self.frame.borrow().content_padding(BASE_PADDING);
        Point::new(self.bounds.x + padding.left, self.bounds.y + padding.top)
    }

    pub fn is_pressed(&self) -> bool {
        self.frame.borrow().is_pressed()
    }

    /// Paint the frame at its full bounds onto `surface`.
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        let mut frame = self.frame.borrow_mut();
        frame.draw(self.bounds.width, self.bounds.height, surface);
    }

    /// Route a local-coordinate pointer event into the frame. Returns true
    /// when the frame asked to be repainted.
    pub fn dispatch(&mut self, event: &PointerEvent) -> bool {
        let (w, h) = (self.bounds.width, self.bounds.height);
        let frame = self.frame.get_mut();
        frame.dispatch_pointer(event, w, h, |e| {
            tracing::trace!(?e, "pointer event not consumed");
            false
        });
        frame.take_redraw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{OutlinePath, Rect, Segment};
    use crate::render::{PaintPass, PaintSpec};
    use crate::widget::{ArrowSide, BubbleStyle};

    /// Records where each painted outline's segments live.
    #[derive(Default)]
    struct Buffers(Vec<*const Segment>);

    impl Surface for Buffers {
        fn draw_outline(&mut self, outline: &OutlinePath, _: &PaintSpec, _: &PaintPass) {
            self.0.push(outline.segments().as_ptr());
        }
    }

    fn decl(side: ArrowSide) -> BubbleDecl {
        BubbleDecl {
            name: Some("B".into()),
            text: None,
            rect: Rect::new(10.0, 20.0, 100.0, 40.0),
            style: BubbleStyle { arrow_side: side, arrow_width: 12.0, ..BubbleStyle::default() },
        }
    }

    #[test]
    fn content_skips_left_arrow() {
        let placed = PlacedBubble::from_decl(&decl(ArrowSide::Left));
        assert_eq!(placed.content_origin(), Point::new(30.0, 28.0));
        let placed = PlacedBubble::from_decl(&decl(ArrowSide::Right));
        assert_eq!(placed.content_origin(), Point::new(18.0, 28.0));
    }

    #[test]
    fn local_coordinates() {
        let placed = PlacedBubble::from_decl(&decl(ArrowSide::None));
        assert_eq!(placed.local(Point::new(15.0, 25.0)), Point::new(5.0, 5.0));
    }

    #[test]
    fn repaint_reuses_outline_buffer() {
        for side in [ArrowSide::Left, ArrowSide::Right] {
            let placed = PlacedBubble::from_decl(&decl(side));
            let mut buffers = Buffers::default();
            placed.draw(&mut buffers);
            placed.draw(&mut buffers);
            assert_eq!(buffers.0.len(), 4);
            assert!(buffers.0.iter().all(|p| *p == buffers.0[0]), "{side:?} reallocated");
        }
    }

    #[test]
    fn dispatch_reports_redraw() {
        let mut placed = PlacedBubble::from_decl(&decl(ArrowSide::Right));
        assert!(placed.dispatch(&PointerEvent::Down { x: 5.0, y: 5.0 }));
        assert!(placed.is_pressed());
        assert!(!placed.dispatch(&PointerEvent::Move { x: 6.0, y: 6.0 }));
    }
}
