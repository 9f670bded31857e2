use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use mandelzoom_core::{AnimationRate, RenderConfig};

// ---------------------------------------------------------------------------
// Application preferences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppPreferences {
    /// Canvas size, iteration cap, colouring and zoom increments.
    #[serde(default)]
    pub render: RenderConfig,
    /// Preset picked in the main menu. `None` keeps the steps stored in `render`.
    #[serde(default)]
    pub animation_rate: Option<AnimationRate>,
    /// Show the frame counter overlay in the viewer.
    #[serde(default = "default_true")]
    pub show_hud: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            animation_rate: None,
            show_hud: true,
        }
    }
}

impl AppPreferences {
    /// Load preferences from next to the executable, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("No preferences file at {}", path.display());
            return Self::default();
        }
        let prefs = match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<AppPreferences>(&json) {
                Ok(prefs) => {
                    info!("Loaded preferences from {}", path.display());
                    prefs
                }
                Err(e) => {
                    error!("Failed to parse preferences: {e}");
                    return Self::default();
                }
            },
            Err(e) => {
                error!("Failed to read preferences file: {e}");
                return Self::default();
            }
        };
        prefs.sanitized()
    }

    /// Replace a stored render config that would not survive validation.
    fn sanitized(mut self) -> Self {
        if let Err(e) = self.render.validate() {
            warn!("Stored render settings rejected ({e}); using defaults");
            self.render = RenderConfig::default();
        }
        self
    }

    /// Persist preferences to disk.
    pub fn save(&self) {
        self.save_to(&config_path());
    }

    fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create config directory: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, &json) {
                    error!("Failed to write preferences: {e}");
                } else {
                    debug!("Saved preferences");
                }
            }
            Err(e) => error!("Failed to serialize preferences: {e}"),
        }
    }

    /// The render config for a run at the chosen animation rate.
    pub fn session_config(&self) -> RenderConfig {
        match self.animation_rate {
            Some(rate) => self.render.clone().with_rate(rate),
            None => self.render.clone(),
        }
    }
}

fn config_path() -> PathBuf {
    crate::app_dir::exe_directory().join("preferences.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mandelzoom_prefs_{name}"));
        let _ = fs::remove_dir_all(&dir);
        dir.join("preferences.json")
    }

    #[test]
    fn missing_file_gives_defaults() {
        assert_eq!(
            AppPreferences::load_from(&scratch("missing")),
            AppPreferences::default()
        );
    }

    #[test]
    fn round_trip_through_disk() {
        let path = scratch("round_trip");
        let mut prefs = AppPreferences::default();
        prefs.render.max_iteration = 321;
        prefs.animation_rate = Some(AnimationRate::Fast);
        prefs.save_to(&path);

        assert_eq!(AppPreferences::load_from(&path), prefs);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn invalid_render_settings_fall_back() {
        let path = scratch("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{ "render": { "max_iteration": 0 }, "show_hud": false }"#).unwrap();

        let prefs = AppPreferences::load_from(&path);
        assert_eq!(prefs.render, RenderConfig::default());
        assert!(!prefs.show_hud);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn negative_offset_step_is_kept() {
        let path = scratch("negative_offset");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"{ "render": { "width": 640, "max_iteration": 300, "offset_step": -0.28 } }"#,
        )
        .unwrap();

        let prefs = AppPreferences::load_from(&path);
        assert_eq!(prefs.render.offset_step, -0.28);
        assert_eq!(prefs.render.width, 640);
        assert_eq!(prefs.render.max_iteration, 300);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn malformed_json_gives_defaults() {
        let path = scratch("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(AppPreferences::load_from(&path), AppPreferences::default());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn session_config_applies_rate() {
        let mut prefs = AppPreferences::default();
        prefs.render.zoom_step = 0.25;
        assert_eq!(prefs.session_config().zoom_step, 0.25);

        prefs.animation_rate = Some(AnimationRate::Fast);
        let cfg = prefs.session_config();
        assert_eq!((cfg.zoom_step, cfg.offset_step), (1.0, 0.54));
    }
}
