//! Game tuning and asset paths
//!
//! Loaded from a JSON file when `LANDER_CONFIG` is set; every field falls back
//! to the built-in defaults so a partial file is enough.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Environment variable naming the settings file
pub const CONFIG_ENV_VAR: &str = "LANDER_CONFIG";

/// Sprite and font locations handed to the texture loader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub ship: PathBuf,
    pub win_platform: PathBuf,
    pub death_platform: PathBuf,
    pub font: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            ship: PathBuf::from("assets/ship.png"),
            win_platform: PathBuf::from("assets/stone.png"),
            death_platform: PathBuf::from("assets/rock.png"),
            font: PathBuf::from("assets/font1.png"),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Timing ===
    /// Seconds per physics tick
    pub fixed_timestep: f32,
    /// Cap on ticks run in a single frame
    pub max_substeps: u32,
    /// Longest frame delta accepted from the wall clock
    pub max_frame_dt: f32,

    // === Player ===
    pub gravity: f32,
    pub player_start: Vec2,
    pub player_speed: f32,
    pub player_size: f32,
    pub boosting_power: f32,
    /// Horizontal velocity multiplier applied every tick (0-1)
    pub drag: f32,

    // === Platforms ===
    pub platform_count: usize,
    pub platform_size: f32,
    pub platform_min_y: i32,
    pub platform_max_y: i32,
    /// Layout seed; `None` picks one at startup
    pub seed: Option<u64>,

    pub assets: AssetPaths,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fixed_timestep: FIXED_TIMESTEP,
            max_substeps: MAX_SUBSTEPS,
            max_frame_dt: MAX_FRAME_DT,

            gravity: ACC_OF_GRAVITY,
            player_start: Vec2::new(0.0, PLAYER_START_Y),
            player_speed: PLAYER_SPEED,
            player_size: PLAYER_SIZE,
            boosting_power: PLAYER_BOOSTING_POWER,
            drag: PLAYER_DRAG,

            platform_count: PLATFORM_COUNT,
            platform_size: PLATFORM_SIZE,
            platform_min_y: PLATFORM_MIN_Y,
            platform_max_y: PLATFORM_MAX_Y,
            seed: None,

            assets: AssetPaths::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&contents)
            .inspect_err(|e| log::warn!("Rejected settings file {}: {}", path.display(), e))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from the file named by `LANDER_CONFIG`, or defaults when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fixed_timestep > 0.0) {
            return Err(invalid("fixed_timestep", "must be positive"));
        }
        if self.max_substeps == 0 {
            return Err(invalid("max_substeps", "must be at least 1"));
        }
        if self.max_frame_dt < self.fixed_timestep {
            return Err(invalid("max_frame_dt", "must be at least one fixed timestep"));
        }
        if !(0.0..=1.0).contains(&self.drag) {
            return Err(invalid("drag", "must be within [0, 1]"));
        }
        if self.platform_count == 0 {
            return Err(invalid("platform_count", "must be at least 1"));
        }
        if self.platform_min_y > self.platform_max_y {
            return Err(invalid("platform_min_y", "must not exceed platform_max_y"));
        }
        if self.player_size <= 0.0 {
            return Err(invalid("player_size", "must be positive"));
        }
        if self.platform_size <= 0.0 {
            return Err(invalid("platform_size", "must be positive"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "drag": 0.5, "seed": 7 }"#).unwrap();
        assert_eq!(settings.drag, 0.5);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.platform_count, PLATFORM_COUNT);
        assert_eq!(settings.assets, AssetPaths::default());
    }

    #[test]
    fn rejects_amplifying_drag() {
        let err = Settings::from_json(r#"{ "drag": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "drag", .. }));
    }

    #[test]
    fn rejects_empty_platform_field() {
        let err = Settings::from_json(r#"{ "platform_count": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "platform_count", .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Settings::from_json("{ drag: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Settings::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
