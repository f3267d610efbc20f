use std::fmt;

use serde::{Deserialize, Serialize};

use crate::difficulty::{Difficulty, DifficultyTable};

/// Player body and flight tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub start_x: f32,
    pub start_y: f32,
    pub width: f32,
    pub height: f32,
    /// Downward acceleration in units/s².
    pub gravity: f32,
    /// Upward speed set by a flap.
    pub flap_velocity: f32,
    pub max_fall_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start_x: 120.0,
            start_y: 300.0,
            width: 34.0,
            height: 24.0,
            gravity: 1400.0,
            flap_velocity: 420.0,
            max_fall_speed: 640.0,
        }
    }
}

/// Obstacle geometry shared by every difficulty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    pub width: f32,
    /// Minimum distance between the gap and the top/bottom of the world.
    pub spawn_padding: f32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            width: 64.0,
            spawn_padding: 60.0,
        }
    }
}

/// Everything tunable about a session. Loadable from JSON; missing fields
/// take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlappyConfig {
    pub world_width: f32,
    pub world_height: f32,
    pub player: PlayerConfig,
    pub obstacle: ObstacleConfig,
    pub max_lives: u32,
    /// Seconds of invulnerability after a non-fatal hit.
    pub resume_delay: f32,
    /// Seconds between player visibility toggles while resuming.
    pub blink_interval: f32,
    /// DOM keyCode that flaps (32 = Space).
    pub flap_key: u32,
    pub start_difficulty: Difficulty,
    pub difficulties: DifficultyTable,
}

impl Default for FlappyConfig {
    fn default() -> Self {
        Self {
            world_width: 480.0,
            world_height: 640.0,
            player: PlayerConfig::default(),
            obstacle: ObstacleConfig::default(),
            max_lives: 3,
            resume_delay: 1.5,
            blink_interval: 0.1,
            flap_key: 32,
            start_difficulty: Difficulty::default(),
            difficulties: DifficultyTable::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config is not valid JSON: {}", e),
            ConfigError::Invalid(msg) => write!(f, "config rejected: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, value)))
    }
}

impl FlappyConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FlappyConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("world_width", self.world_width)?;
        positive("world_height", self.world_height)?;
        positive("player.width", self.player.width)?;
        positive("player.height", self.player.height)?;
        positive("player.gravity", self.player.gravity)?;
        positive("player.flap_velocity", self.player.flap_velocity)?;
        positive("player.max_fall_speed", self.player.max_fall_speed)?;
        positive("obstacle.width", self.obstacle.width)?;
        positive("resume_delay", self.resume_delay)?;
        positive("blink_interval", self.blink_interval)?;
        if self.max_lives == 0 {
            return Err(ConfigError::Invalid("max_lives must be at least 1".into()));
        }
        if !(self.obstacle.spawn_padding >= 0.0) {
            return Err(ConfigError::Invalid("obstacle.spawn_padding must not be negative".into()));
        }
        for (difficulty, settings) in self.difficulties.iter() {
            let name = difficulty.name();
            positive(&format!("{}.gap", name), settings.gap)?;
            positive(&format!("{}.spawn_delay", name), settings.spawn_delay)?;
            positive(&format!("{}.scroll_speed", name), settings.scroll_speed)?;
            if settings.gap <= self.player.height || settings.gap >= self.world_height {
                return Err(ConfigError::Invalid(format!(
                    "{}.gap {} must fit between player height {} and world height {}",
                    name, settings.gap, self.player.height, self.world_height
                )));
            }
        }
        Ok(())
    }
}
