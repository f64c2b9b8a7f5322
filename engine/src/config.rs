//! Scene Configuration
//!
//! Centralizes the tunable scene parameters (terrain dimensions, camera
//! speeds, atmosphere) in one serde-backed struct so the feel of the
//! scene can be adjusted from a JSON file without touching code. Every
//! field has a default matching the stock scene.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Terrain grid and world-space placement settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainSettings {
    /// Heightmap width in samples.
    pub grid_width: usize,
    /// Heightmap depth in samples.
    pub grid_depth: usize,
    /// World-space extent of the terrain plane on both axes.
    pub world_size: f32,
    /// World units of elevation per heightmap unit.
    pub height_scale: f32,
    /// Vertical offset applied to the whole mesh.
    pub y_offset: f32,
    /// Fixed noise phase for reproducible terrain. `None` draws a fresh
    /// phase every run.
    pub phase: Option<f32>,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            grid_width: 256,
            grid_depth: 256,
            world_size: 7500.0,
            height_scale: 10.0,
            y_offset: -450.0,
            phase: None,
        }
    }
}

/// Camera movement and lens settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Flight speed in world units per second.
    pub move_speed: f32,
    /// Yaw radians per pixel of horizontal drag.
    pub drag_sensitivity: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            move_speed: 1200.0,
            drag_sensitivity: 0.002,
            fov_degrees: 60.0,
            near: 1.0,
            far: 20000.0,
        }
    }
}

/// Sun, fog, and sky settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosphereSettings {
    /// Sun direction; normalized before upload.
    pub sun_direction: [f32; 3],
    /// Ambient light intensity (0.0 = unlit shadow side, 1.0 = flat).
    pub ambient: f32,
    /// Exponential fog density.
    pub fog_density: f32,
    /// Sky and fog color (RGB, 0..1).
    pub sky_color: [f32; 3],
}

impl Default for AtmosphereSettings {
    fn default() -> Self {
        Self {
            // Sun high overhead, slightly toward the east
            sun_direction: [100.0, 500.0, -100.0],
            ambient: 0.4,
            // Soft haze in the scene's sky blue
            fog_density: 0.0008,
            sky_color: [0.529, 0.808, 0.922],
        }
    }
}

/// Complete scene configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub terrain: TerrainSettings,
    pub camera: CameraSettings,
    pub atmosphere: AtmosphereSettings,
}

/// Errors that can occur while loading a scene config.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}

impl SceneConfig {
    /// Load a scene config from a JSON file. Missing fields fall back to
    /// their defaults, so partial overrides are fine.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Build a camera from the configured movement and lens settings.
    pub fn camera(&self) -> crate::camera::Camera {
        crate::camera::Camera {
            move_speed: self.camera.move_speed,
            drag_sensitivity: self.camera.drag_sensitivity,
            fov: self.camera.fov_degrees.to_radians(),
            near: self.camera.near,
            far: self.camera.far,
            ..crate::camera::Camera::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roundtrip() {
        let config = SceneConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SceneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.terrain.grid_width, config.terrain.grid_width);
        assert_eq!(back.camera.move_speed, config.camera.move_speed);
        assert_eq!(back.atmosphere.sky_color, config.atmosphere.sky_color);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SceneConfig =
            serde_json::from_str(r#"{"terrain": {"grid_width": 64, "phase": 0.5}}"#).unwrap();
        assert_eq!(config.terrain.grid_width, 64);
        assert_eq!(config.terrain.phase, Some(0.5));
        // Everything else falls back to defaults
        assert_eq!(config.terrain.grid_depth, 256);
        assert_eq!(config.camera.fov_degrees, 60.0);
    }

    #[test]
    fn test_camera_from_settings() {
        let mut config = SceneConfig::default();
        config.camera.move_speed = 300.0;
        config.camera.fov_degrees = 90.0;
        let camera = config.camera();
        assert_eq!(camera.move_speed, 300.0);
        assert!((camera.fov - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }
}
