use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::canvas::HexColor;
use crate::editor::StrokeSize;

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Editor defaults read from disk. The file is never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfigData {
    /// Initial stroke and text color
    #[serde(default = "default_stroke_color")]
    pub stroke_color: HexColor,

    /// Initial canvas background color
    #[serde(default = "default_background_color")]
    pub background_color: HexColor,

    /// Initial line width / font size (clamped into the valid range)
    #[serde(default = "default_size")]
    pub size: i64,

    /// Font file for text annotations; the bundled UI font is used otherwise
    #[serde(default)]
    pub font_path: Option<PathBuf>,
}

fn default_stroke_color() -> HexColor {
    HexColor::BLACK
}

fn default_background_color() -> HexColor {
    HexColor::WHITE
}

fn default_size() -> i64 {
    StrokeSize::DEFAULT.get() as i64
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            background_color: default_background_color(),
            size: default_size(),
            font_path: None,
        }
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    pub data: AppConfigData,
    /// Path the config was (or would have been) read from
    pub config_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Result of loading config from disk
struct LoadConfigResult {
    data: AppConfigData,
    /// Error message if config was reset to defaults due to an error
    reset_reason: Option<String>,
}

/// Load configuration from `config_path`
fn load_config(config_path: &Path) -> LoadConfigResult {
    let (data, reset_reason) = if config_path.exists() {
        match std::fs::read_to_string(config_path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", config_path);
                    (data, None)
                }
                Err(e) => {
                    warn!("Failed to parse config file: {}", e);
                    (
                        AppConfigData::default(),
                        Some(format!("Configuration file was corrupted: {}", e)),
                    )
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    AppConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (AppConfigData::default(), None)
    };

    LoadConfigResult { data, reset_reason }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config(&config.config_path);
    config.data = result.data;

    // Set notification if config was reset due to an error
    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sketchpad-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_app_config_data_default() {
        let data = AppConfigData::default();
        assert_eq!(data.stroke_color, HexColor::BLACK);
        assert_eq!(data.background_color, HexColor::WHITE);
        assert_eq!(data.size, 16);
        assert!(data.font_path.is_none());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let data: AppConfigData = serde_json::from_str(r##"{ "background_color": "#FF0000" }"##).unwrap();
        assert_eq!(data.background_color, HexColor::rgb(255, 0, 0));
        assert_eq!(data.stroke_color, HexColor::BLACK);
        assert_eq!(data.size, 16);
    }

    #[test]
    fn test_config_rejects_bad_color() {
        let result = serde_json::from_str::<AppConfigData>(r#"{ "stroke_color": "red" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults_silently() {
        let result = load_config(Path::new("does/not/exist/config.json"));
        assert_eq!(result.data, AppConfigData::default());
        assert!(result.reset_reason.is_none());
    }

    #[test]
    fn test_corrupt_file_resets_with_reason() {
        let path = temp_config("corrupt.json", "{ not json");
        let result = load_config(&path);
        assert_eq!(result.data, AppConfigData::default());
        assert!(result.reset_reason.unwrap().contains("corrupted"));
    }

    #[test]
    fn test_valid_file_is_loaded() {
        let path = temp_config(
            "valid.json",
            r##"{ "stroke_color": "#00ff00", "size": 4, "font_path": "fonts/a.ttf" }"##,
        );
        let result = load_config(&path);
        assert!(result.reset_reason.is_none());
        assert_eq!(result.data.stroke_color, HexColor::rgb(0, 255, 0));
        assert_eq!(result.data.size, 4);
        assert_eq!(result.data.font_path, Some(PathBuf::from("fonts/a.ttf")));
    }

    #[test]
    fn test_config_reset_notification_default() {
        let notification = ConfigResetNotification::default();
        assert!(!notification.show);
        assert!(notification.reason.is_none());
    }
}
