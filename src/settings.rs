//! Demo host settings stored as settings.json in the app data directory
//!
//! The rating itself is deliberately absent: every session starts unrated.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use star_rating::constants::{APP_NAME, DEFAULT_STAR_COUNT};
use tracing::{debug, warn};

/// How the demo draws its stars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    Vector,
    Text,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Host region handed to the widget; None fills the panel
    pub container_width: Option<f32>,
    pub container_height: Option<f32>,

    // Widget props
    pub max_stars: i32,
    pub read_only: bool,
    pub glyph_style: GlyphStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            container_width: Some(200.0),
            container_height: Some(40.0),
            max_stars: DEFAULT_STAR_COUNT as i32,
            read_only: false,
            glyph_style: GlyphStyle::Vector,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                } else {
                    debug!(path = %path.display(), "Settings saved");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }
}

/// Per-user data directory for settings and logs
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}
