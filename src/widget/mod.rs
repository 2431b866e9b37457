//! The bubble widget and its building blocks.

mod bubble;
mod interaction;
mod style;

pub use bubble::BubbleFrame;
pub use interaction::{InteractionState, PointerEvent, PressState, Response};
pub use style::{defaults, ArrowSide, BubbleStyle, Color, Padding};
