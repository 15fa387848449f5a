//! User settings read from settings.json in the app data directory
//!
//! The file is optional and never written back.

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_w: f32,
    pub window_h: f32,
    pub min_window_w: f32,
    pub min_window_h: f32,

    // Lists
    pub pull_threshold: f32,
    pub initial_tag: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_w: 420.0,
            window_h: 640.0,
            min_window_w: 320.0,
            min_window_h: 360.0,
            pull_threshold: 64.0,
            initial_tag: 0,
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings.initial_tag, 0);
        assert_eq!(settings.pull_threshold, 64.0);
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings.window_w, Settings::default().window_w);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{ "initial_tag": 2, "pull_threshold": 90.0 }"#,
        )
        .unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings.initial_tag, 2);
        assert_eq!(settings.pull_threshold, 90.0);
        assert_eq!(settings.window_h, 640.0);
    }
}
