//! App struct definition and core initialization.

use std::cell::RefCell;
use std::path::PathBuf;

use iced::widget::canvas::Cache;
use iced::{Point, Task};

use crate::config::ViewerConfig;
use crate::xml::{load_bubbles_file, BubbleDecl};

use super::state::PlacedBubble;
use super::Message;

type InitParams = (Vec<BubbleDecl>, Option<PathBuf>, ViewerConfig);

// Thread-local storage for init params
thread_local! {
    pub static INIT_PARAMS: RefCell<Option<InitParams>> = const { RefCell::new(None) };
}

/// Viewer state.
pub struct App {
    pub(crate) bubbles: Vec<PlacedBubble>,
    pub(crate) source: Option<PathBuf>,
    pub(crate) config: ViewerConfig,
    pub(crate) background: iced::Color,
    pub(crate) frame_cache: Cache,
    pub(crate) mouse_position: Option<Point>,
    /// Index of the bubble that received the last pointer-down.
    pub(crate) pressed_bubble: Option<usize>,
    pub(crate) status: String,
}

impl App {
    pub fn title(state: &Self) -> String {
        match &state.source {
            Some(path) => format!("Bubble Viewer - {}", path.display()),
            None => "Bubble Viewer".to_string(),
        }
    }

    pub fn boot() -> (Self, Task<Message>) {
        let (decls, source, config) = INIT_PARAMS
            .with(|cell| cell.borrow_mut().take())
            .unwrap_or_else(|| (Vec::new(), None, ViewerConfig::default()));
        (Self::new(&decls, source, config), Task::none())
    }

    pub(crate) fn new(decls: &[BubbleDecl], source: Option<PathBuf>, config: ViewerConfig) -> Self {
        let [r, g, b, a] = config.background_color().to_rgba8();
        let app = Self {
            bubbles: decls.iter().map(PlacedBubble::from_decl).collect(),
            source,
            background: iced::Color::from_rgba8(r, g, b, a as f32 / 255.0),
            config,
            frame_cache: Cache::default(),
            mouse_position: None,
            pressed_bubble: None,
            status: String::new(),
        };
        tracing::info!(count = app.bubbles.len(), "viewer started");
        app
    }

    /// Re-read the layout file, dropping any press state.
    pub(crate) fn reload(&mut self) {
        let Some(path) = self.source.clone() else {
            self.status = "Nothing to reload".into();
            return;
        };
        match load_bubbles_file(&path, self.config.density) {
            Ok(decls) => {
                self.bubbles = decls.iter().map(PlacedBubble::from_decl).collect();
                self.pressed_bubble = None;
                self.status = format!("Reloaded {} bubble(s)", self.bubbles.len());
                self.frame_cache.clear();
            }
            Err(e) => {
                tracing::warn!("Reload of {} failed: {}", path.display(), e);
                self.status = format!("Reload failed: {e}");
            }
        }
    }
}
