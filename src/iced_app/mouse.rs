//! Mouse event handlers routing canvas input into bubble press states.

use iced::Point;

use crate::widget::PointerEvent;

use super::app::App;

impl App {
    pub(super) fn handle_mouse_move(&mut self, pos: Point) {
        self.mouse_position = Some(pos);
        if let Some(idx) = self.hit_test(pos) {
            let local = self.bubbles[idx].local(pos);
            self.dispatch(idx, PointerEvent::Move { x: local.x, y: local.y });
        }
    }

    pub(super) fn handle_mouse_down(&mut self, pos: Point) {
        let Some(idx) = self.hit_test(pos) else {
            return;
        };
        self.pressed_bubble = Some(idx);
        let local = self.bubbles[idx].local(pos);
        self.dispatch(idx, PointerEvent::Down { x: local.x, y: local.y });
        self.status = format!("Pressed {}", self.bubbles[idx].label());
    }

    pub(super) fn handle_mouse_up(&mut self, pos: Point) {
        let Some(idx) = self.pressed_bubble.take() else {
            return;
        };
        let local = self.bubbles[idx].local(pos);
        self.dispatch(idx, PointerEvent::Up { x: local.x, y: local.y });
        self.status = format!("Released {}", self.bubbles[idx].label());
    }

    /// The cursor left the canvas mid-gesture.
    pub(super) fn handle_cancel(&mut self) {
        self.mouse_position = None;
        if let Some(idx) = self.pressed_bubble.take() {
            self.dispatch(idx, PointerEvent::Cancel);
            self.status = format!("Cancelled {}", self.bubbles[idx].label());
        }
    }

    /// Topmost bubble under `pos`. Later declarations draw on top.
    pub(crate) fn hit_test(&self, pos: Point) -> Option<usize> {
        self.bubbles.iter().rposition(|b| b.bounds.contains(pos))
    }

    fn dispatch(&mut self, idx: usize, event: PointerEvent) {
        if self.bubbles[idx].dispatch(&event) {
            self.frame_cache.clear();
        }
    }
}
