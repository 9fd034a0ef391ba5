//! Simulation state and core types
//!
//! Everything the physics step reads or writes lives here.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::rng::MatchRng;
use crate::config::GameConfig;

/// Fixed rectangular play area, origin top-left, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Ball color (8 bits per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Tint {
    pub const RED: Tint = Tint::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniform random color, channels drawn in r, g, b order
    pub fn random(rng: &mut MatchRng) -> Self {
        let r = rng.uniform(0, 255) as u8;
        let g = rng.uniform(0, 255) as u8;
        let b = rng.uniform(0, 255) as u8;
        Self { r, g, b }
    }

    /// Normalized RGBA for GPU upload
    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha,
        ]
    }
}

impl Default for Tint {
    fn default() -> Self {
        Tint::RED
    }
}

/// The bouncing disc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: DVec2,
    /// Units per tick
    pub vel: DVec2,
    pub radius: f64,
    pub tint: Tint,
}

impl Ball {
    /// Ball at the arena center moving diagonally down-right
    pub fn centered(arena: &Arena, radius: f64, start_velocity: f64) -> Self {
        Self {
            pos: arena.center(),
            vel: DVec2::splat(start_velocity),
            radius,
            tint: Tint::default(),
        }
    }
}

/// Read-only copy of what the presenter needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub tint: Tint,
    pub score: u32,
    pub speed: f64,
}

/// Ball plus bounce counter. The counter is the match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    pub arena: Arena,
    pub ball: Ball,
    pub score: u32,
}

impl Simulation {
    /// Fresh match state: centered ball, start velocity, zero score
    pub fn new(config: &GameConfig) -> Self {
        let arena = Arena::new(config.arena_width, config.arena_height);
        Self {
            arena,
            ball: Ball::centered(&arena, config.ball_radius, config.start_velocity),
            score: 0,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            x: self.ball.pos.x,
            y: self.ball.pos.y,
            radius: self.ball.radius,
            tint: self.ball.tint,
            score: self.score,
            speed: self.speed(),
        }
    }
}
