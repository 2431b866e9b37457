//! Speech-bubble widget
//!
//! A container that paints a rounded-rectangle bubble with a side arrow,
//! a blurred inner shadow, and a stroke whose color tracks the pressed state.
//! Layouts are declared in XML and can be viewed interactively (iced) or
//! rasterized headlessly.

pub mod config;
pub mod error;
pub mod geometry;
pub mod iced_app;
pub mod render;
pub mod widget;
pub mod xml;

pub use error::{Error, Result};
pub use geometry::{build_outline, OutlineBuilder, OutlinePath, Segment};
pub use widget::{ArrowSide, BubbleFrame, BubbleStyle, Color, InteractionState, PointerEvent};
