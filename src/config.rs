//! Game tuning
//!
//! Every number the match rules depend on, in one serializable struct.
//! Defaults reproduce the classic game exactly.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub arena_width: f64,
    pub arena_height: f64,

    // === Ball ===
    pub ball_radius: f64,
    /// Per-axis velocity at match start
    pub start_velocity: f64,
    /// Fractional step applied by speed-up / slow-down
    pub speed_increment: f64,

    // === Match parameters (inclusive ranges) ===
    pub target_range: (u32, u32),
    pub max_speed_range: (u32, u32),

    /// Fixed RNG seed for reproducible matches; OS entropy when `None`
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            ball_radius: BALL_RADIUS,
            start_velocity: BALL_START_VELOCITY,
            speed_increment: SPEED_INCREMENT,
            target_range: (TARGET_MIN, TARGET_MAX),
            max_speed_range: (MAX_SPEED_MIN, MAX_SPEED_MAX),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Default tuning with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the arena can hold the ball and the ranges are sane
    pub fn validate(&self) -> Result<(), GameError> {
        if !(self.arena_width > 0.0 && self.arena_height > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "arena must be positive, got {}x{}",
                self.arena_width, self.arena_height
            )));
        }
        if !(self.ball_radius > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "ball radius must be positive, got {}",
                self.ball_radius
            )));
        }
        let diameter = self.ball_radius * 2.0;
        if diameter >= self.arena_width || diameter >= self.arena_height {
            return Err(GameError::InvalidConfig(format!(
                "ball of radius {} does not fit a {}x{} arena",
                self.ball_radius, self.arena_width, self.arena_height
            )));
        }
        if !(self.speed_increment > 0.0 && self.speed_increment < 1.0) {
            return Err(GameError::InvalidConfig(format!(
                "speed increment must be in (0, 1), got {}",
                self.speed_increment
            )));
        }
        check_range("target_range", self.target_range)?;
        check_range("max_speed_range", self.max_speed_range)?;
        Ok(())
    }

    /// Multiplier applied by a speed-up press
    pub fn speed_up_factor(&self) -> f64 {
        1.0 + self.speed_increment
    }

    /// Multiplier applied by a slow-down press
    pub fn slow_down_factor(&self) -> f64 {
        1.0 - self.speed_increment
    }
}

fn check_range(name: &str, (lo, hi): (u32, u32)) -> Result<(), GameError> {
    if lo > hi {
        return Err(GameError::InvalidConfig(format!(
            "{name} is inverted: {lo} > {hi}"
        )));
    }
    Ok(())
}
