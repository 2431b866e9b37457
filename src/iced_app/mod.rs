//! Iced-based viewer for bubble layouts.
//!
//! This module is split into several submodules:
//! - `app`: App struct and initialization
//! - `state`: Placed bubbles and canvas messages
//! - `styles`: UI styling functions and color palette
//! - `mouse`: Pointer routing into bubble press states
//! - `update`: App::update() message dispatch
//! - `view`: App::view() layout
//! - `render`: Canvas program painting bubbles onto an iced frame

mod app;
mod mouse;
mod render;
mod state;
mod styles;
mod update;
mod view;

use std::path::PathBuf;

use crate::config::ViewerConfig;
use crate::xml::BubbleDecl;

pub use app::App;
pub use render::{outline_to_path, CanvasSurface};
pub use state::{CanvasMessage, PlacedBubble};
pub use styles::palette;

use app::INIT_PARAMS;

/// Application messages.
#[derive(Debug, Clone)]
pub enum Message {
    CanvasEvent(CanvasMessage),
    /// Re-read the layout file from disk.
    Reload,
}

/// Run the viewer with the given bubbles. `source` enables reloading.
pub fn run_iced_ui(
    bubbles: Vec<BubbleDecl>,
    source: Option<PathBuf>,
    config: ViewerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let size = (config.window_width, config.window_height);
    // Store in thread-local for the boot function
    INIT_PARAMS.with(|cell| *cell.borrow_mut() = Some((bubbles, source, config)));

    iced::application(App::boot, App::update, App::view)
        .title(App::title)
        .window_size(size)
        .run()?;

    Ok(())
}
