//! Viewer configuration persistence.
//!
//! Stores viewer preferences (display density, background, window size) as
//! JSON at `~/.local/share/bubble-sim/config.json`. Loaded once on startup;
//! a `--density` override on the command line is written back.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::widget::Color;

/// Default config file path.
fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bubble-sim")
        .join("config.json")
}

/// Persisted viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Pixels per density-independent unit.
    #[serde(default = "default_density")]
    pub density: f32,
    /// Canvas background as `#RRGGBB` / `#AARRGGBB`.
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_density() -> f32 { 1.0 }
fn default_background() -> String { "#F2F2F2".into() }
fn default_window_width() -> f32 { 800.0 }
fn default_window_height() -> f32 { 600.0 }

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            density: default_density(),
            background: default_background(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            path: default_path(),
        }
    }
}

impl ViewerConfig {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&default_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let mut config = match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Invalid config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        config.path = path.to_path_buf();
        config
    }

    /// Persist current config to disk.
    pub fn save(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Failed to create config dir {}: {}", parent.display(), e);
                return;
            }
        }
        if let Ok(json) = serde_json::to_string_pretty(self) {
            if let Err(e) = std::fs::write(&self.path, json) {
                tracing::warn!("Failed to save config {}: {}", self.path.display(), e);
            }
        }
    }

    /// Use `density` from now on and remember it for later runs.
    /// Non-positive or non-finite values are ignored.
    pub fn override_density(&mut self, density: f32) {
        if !density.is_finite() || density <= 0.0 {
            tracing::warn!("Ignoring density override {density}");
            return;
        }
        if density != self.density {
            self.density = density;
            self.save();
            tracing::info!("Saved density {} to {}", density, self.path.display());
        }
    }

    /// Background color, or light grey when the stored value is unusable.
    pub fn background_color(&self) -> Color {
        Color::from_hex(&self.background).unwrap_or_else(|e| {
            tracing::warn!("{e}; using default background");
            Color::rgb(0.95, 0.95, 0.95)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ViewerConfig::load_from(&dir.path().join("nope.json"));
        assert_eq!(config.density, 1.0);
        assert_eq!(config.window_width, 800.0);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.json");
        let mut config = ViewerConfig::load_from(&path);
        config.density = 2.5;
        config.background = "#000000".into();
        config.save();

        let loaded = ViewerConfig::load_from(&path);
        assert_eq!(loaded.density, 2.5);
        assert_eq!(loaded.background_color(), Color::BLACK);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"density": 3.0}"#).unwrap();
        let config = ViewerConfig::load_from(&path);
        assert_eq!(config.density, 3.0);
        assert_eq!(config.background, "#F2F2F2");
    }

    #[test]
    fn density_override_is_remembered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = ViewerConfig::load_from(&path);
        config.override_density(2.0);
        assert_eq!(config.density, 2.0);
        assert_eq!(ViewerConfig::load_from(&path).density, 2.0);
    }

    #[test]
    fn bad_density_override_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = ViewerConfig::load_from(&path);
        config.override_density(0.0);
        config.override_density(f32::NAN);
        assert_eq!(config.density, 1.0);
        assert!(!path.exists());
    }

    #[test]
    fn unwritable_dir_keeps_running() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();
        // The parent "directory" is a regular file.
        let path = blocker.join("config.json");
        let mut config = ViewerConfig::load_from(&path);
        config.override_density(2.0);
        assert_eq!(config.density, 2.0);
        assert!(!path.exists());
    }
}
