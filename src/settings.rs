//! Runtime settings
//!
//! Read from `assets/settings.ron` on native builds when the file exists.
//! Every field has a default, so a settings file only needs the values it
//! changes.

use std::path::Path;
use serde::{Deserialize, Serialize};

/// Default location of the settings file, relative to the working directory
pub const SETTINGS_PATH: &str = "assets/settings.ron";

/// Error type for settings loading
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FpsLimit {
    /// 30 FPS
    Fps30,
    /// 60 FPS (smooth gameplay)
    #[default]
    Fps60,
    /// Unlocked (as fast as possible)
    Unlocked,
}

impl FpsLimit {
    /// Get the target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }
}

/// Player velocity integration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementSettings {
    /// Acceleration while a movement key is held (m/s²)
    pub acceleration: f32,
    /// Exponential velocity damping per second
    pub damping: f32,
    /// Largest timestep fed to one movement step (s)
    pub max_step: f32,
}

impl Default for MovementSettings {
    fn default() -> Self {
        // Top speed is acceleration / damping = 4 m/s
        Self {
            acceleration: 40.0,
            damping: 10.0,
            max_step: 0.05,
        }
    }
}

/// Player body used for collision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Eye height above the feet
    pub eye_height: f32,
    /// Half width of the body box in X and Z
    pub radius: f32,
    /// Body extends this far above the eye
    pub head_room: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            eye_height: 1.6,
            radius: 0.3,
            head_room: 0.1,
        }
    }
}

/// All runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Built-in layout name or a path to a layout RON file
    pub layout: String,
    /// Radians of turn per pixel of mouse movement
    pub mouse_sensitivity: f32,
    /// Radians per second at full right-stick deflection
    pub stick_look_speed: f32,
    /// Vertical field of view
    pub fov_degrees: f32,
    pub movement: MovementSettings,
    pub player: PlayerSettings,
    /// How far away props can be used
    pub interact_range: f32,
    /// How long a prompt stays on screen
    pub prompt_seconds: f32,
    /// Delay between escaping and the room resetting
    pub restart_seconds: f32,
    pub fps_limit: FpsLimit,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: "office".to_string(),
            mouse_sensitivity: 0.003,
            stick_look_speed: 2.5,
            fov_degrees: 75.0,
            movement: MovementSettings::default(),
            player: PlayerSettings::default(),
            interact_range: 3.0,
            prompt_seconds: 3.0,
            restart_seconds: 3.0,
            fps_limit: FpsLimit::default(),
        }
    }
}

impl Settings {
    /// Reject values that would break movement or timing
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("mouse_sensitivity", self.mouse_sensitivity),
            ("stick_look_speed", self.stick_look_speed),
            ("movement.acceleration", self.movement.acceleration),
            ("movement.damping", self.movement.damping),
            ("movement.max_step", self.movement.max_step),
            ("player.eye_height", self.player.eye_height),
            ("player.radius", self.player.radius),
            ("interact_range", self.interact_range),
            ("prompt_seconds", self.prompt_seconds),
            ("restart_seconds", self.restart_seconds),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::Invalid(format!("{} must be positive, got {}", name, value)));
            }
        }
        if !self.player.head_room.is_finite() || self.player.head_room < 0.0 {
            return Err(SettingsError::Invalid("player.head_room must not be negative".to_string()));
        }
        if !(10.0..=170.0).contains(&self.fov_degrees) {
            return Err(SettingsError::Invalid(format!("fov_degrees out of range: {}", self.fov_degrees)));
        }
        if self.layout.trim().is_empty() {
            return Err(SettingsError::Invalid("layout must not be empty".to_string()));
        }
        Ok(())
    }

    /// Parse and validate settings from a RON string
    pub fn from_ron(s: &str) -> Result<Self, SettingsError> {
        let settings: Settings = ron::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }

    /// Load settings from `path`, falling back to defaults if the file is
    /// missing or invalid
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        Settings::default().validate().unwrap();
    }

    #[test]
    fn test_shipped_settings_file_parses() {
        let settings = Settings::from_ron(include_str!("../assets/settings.ron")).unwrap();
        assert_eq!(settings.layout, "office");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::from_ron("(layout: \"annex\", movement: (acceleration: 30.0))").unwrap();
        assert_eq!(settings.layout, "annex");
        assert_eq!(settings.movement.acceleration, 30.0);
        assert_eq!(settings.movement.damping, MovementSettings::default().damping);
        assert_eq!(settings.prompt_seconds, 3.0);
    }

    #[test]
    fn test_negative_value_rejected() {
        let err = Settings::from_ron("(interact_range: -1.0)").unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_fps_limit_parses() {
        let settings = Settings::from_ron("(fps_limit: Unlocked)").unwrap();
        assert_eq!(settings.fps_limit.frame_time(), None);
    }

    #[test]
    fn test_load_or_default_with_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        std::fs::write(&path, "(layout: ").unwrap();
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load_or_default(dir.path().join("nope.ron")), Settings::default());
    }
}
