//! World configuration
//!
//! Supplied once by the host when the world is built. The loader validates
//! geometry so the simulation never has to guard against zero sizes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Configuration rejected by [`WorldConfig::validate`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("screen size must be positive and finite, got {width}x{height}")]
    InvalidScreen { width: f32, height: f32 },
    #[error("platform pool must hold at least one platform")]
    EmptyPool,
    #[error("sensor interval must be non-zero")]
    InvalidSensorInterval,
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("can't read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Visible field in world units, centered on the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Y coordinate of the bottom edge
    pub fn bottom(&self) -> f32 {
        -self.height / 2.0
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }
}

/// Host-supplied world configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Device screen width (pixels)
    pub screen_width: f32,
    /// Device screen height (pixels)
    pub screen_height: f32,
    /// Seed for the platform generator
    pub seed: u64,
    /// Number of platforms in the recycled pool
    pub platform_count: usize,
    /// Accelerometer update interval requested from the sensor
    pub sensor_interval_ms: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            screen_width: 750.0,
            screen_height: 1334.0,
            seed: 0,
            platform_count: PLATFORM_COUNT,
            sensor_interval_ms: SENSOR_INTERVAL_MS,
        }
    }
}

impl WorldConfig {
    /// Config for a given screen size, everything else default
    pub fn with_screen(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(self.screen_width) || !valid(self.screen_height) {
            return Err(ConfigError::InvalidScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if self.platform_count == 0 {
            return Err(ConfigError::EmptyPool);
        }
        if self.sensor_interval_ms == 0 {
            return Err(ConfigError::InvalidSensorInterval);
        }
        Ok(())
    }

    /// World width is fixed; height follows the screen aspect ratio
    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            WORLD_WIDTH,
            WORLD_WIDTH * (self.screen_height / self.screen_width),
        )
    }
}
