//! Bouncing Ball - keep the disc under the speed cap until it racks up enough bounces
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, bounce scoring, match parameters)
//! - `controller`: Match rules (win/loss predicates, input, reset)
//! - `scene`: Welcome / Playing / Ended screen state machine
//! - `presenter`: Presentation contract and HUD text
//! - `renderer`: WebGPU rendering pipeline
//! - `input`: Key bindings
//! - `config`: Data-driven game tuning

pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod presenter;
pub mod renderer;
pub mod scene;
pub mod sim;

pub use config::GameConfig;
pub use controller::{InputEvent, MatchController, Outcome};
pub use error::GameError;
pub use presenter::Presenter;
pub use scene::{Scene, SceneEvent, SceneRouter};

/// Game configuration constants
pub mod consts {
    /// Window title
    pub const WINDOW_TITLE: &str = "Bouncing Ball Game";

    /// Arena dimensions (origin top-left, y grows downward)
    pub const ARENA_WIDTH: f64 = 800.0;
    pub const ARENA_HEIGHT: f64 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 20.0;
    /// Per-axis velocity at match start (units/tick)
    pub const BALL_START_VELOCITY: f64 = 3.0;

    /// Speed-up multiplies by 1 + this, slow-down by 1 - this
    pub const SPEED_INCREMENT: f64 = 0.2;

    /// Bounces needed to win (inclusive range)
    pub const TARGET_MIN: u32 = 20;
    pub const TARGET_MAX: u32 = 50;

    /// Speed cap before the match is lost (inclusive range)
    pub const MAX_SPEED_MIN: u32 = 10;
    pub const MAX_SPEED_MAX: u32 = 15;
}
