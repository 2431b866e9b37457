//! Pressed-state tracking driven by pointer events.

/// Pointer notification delivered to a widget, in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Up { x: f32, y: f32 },
    Cancel,
    Move { x: f32, y: f32 },
    Scroll { dy: f32 },
}

/// The two interaction states of a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressState {
    #[default]
    Idle,
    Pressed,
}

/// Outcome of feeding one event to [`InteractionState::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Response {
    pub redraw: bool,
}

/// Single shared press flag. Pointer identity is not tracked: any down, up
/// or cancel affects the same state.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionState {
    state: PressState,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PressState {
        self.state
    }

    pub fn is_pressed(&self) -> bool {
        self.state == PressState::Pressed
    }

    /// `inside` tells whether a `Down` landed within the widget bounds.
    pub fn handle(&mut self, event: &PointerEvent, inside: bool) -> Response {
        match event {
            PointerEvent::Down { .. } if inside => {
                self.state = PressState::Pressed;
                Response { redraw: true }
            }
            PointerEvent::Up { .. } | PointerEvent::Cancel => {
                self.state = PressState::Idle;
                Response { redraw: true }
            }
            _ => Response::default(),
        }
    }
}
