//! Match rules
//!
//! Owns one match: the simulation, its thresholds, the pause flag and the RNG.
//! Win is checked before loss, so a tick that does both counts as a win.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::sim::{MatchParams, MatchRng, Simulation, Snapshot};

/// Player input during a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    SpeedUp,
    SpeedDown,
    TogglePause,
}

/// How a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Score reached the target
    Win,
    /// Speed exceeded the cap
    Loss,
}

impl Outcome {
    pub fn is_win(self) -> bool {
        self == Outcome::Win
    }
}

/// One match in progress
#[derive(Debug, Clone)]
pub struct MatchController {
    config: GameConfig,
    rng: MatchRng,
    sim: Simulation,
    params: MatchParams,
    paused: bool,
    /// Set once a predicate fires; later ticks are no-ops until reset
    outcome: Option<Outcome>,
}

impl MatchController {
    /// Seed from the config (or entropy) and sample the first match
    pub fn new(config: GameConfig) -> Self {
        let rng = MatchRng::from_config(&config);
        log::info!("Match RNG seed: {}", rng.seed());
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: GameConfig, mut rng: MatchRng) -> Self {
        let params = MatchParams::sample(&mut rng, &config);
        Self::with_params(config, params, rng)
    }

    /// Start a match with fixed thresholds
    pub fn with_params(config: GameConfig, params: MatchParams, rng: MatchRng) -> Self {
        Self {
            sim: Simulation::new(&config),
            config,
            rng,
            params,
            paused: false,
            outcome: None,
        }
    }

    /// Advance one tick and evaluate win, then loss.
    /// Returns the outcome on the tick the match ends.
    pub fn on_tick(&mut self) -> Option<Outcome> {
        if self.paused || self.outcome.is_some() {
            return None;
        }

        self.sim.step(&mut self.rng);

        let outcome = if self.sim.score >= self.params.target() {
            Outcome::Win
        } else if self.sim.speed() > self.params.max_speed() {
            Outcome::Loss
        } else {
            return None;
        };

        log::info!(
            "Match over: {:?} (score {} / {}, speed {:.2} / {:.2})",
            outcome,
            self.sim.score,
            self.params.target(),
            self.sim.speed(),
            self.params.max_speed()
        );
        self.outcome = Some(outcome);
        Some(outcome)
    }

    pub fn on_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::SpeedUp => {
                self.sim.scale_speed(self.config.speed_up_factor());
                log::debug!("Speed up: {:.2}", self.sim.speed());
            }
            InputEvent::SpeedDown => {
                self.sim.scale_speed(self.config.slow_down_factor());
                log::debug!("Speed down: {:.2}", self.sim.speed());
            }
            InputEvent::TogglePause => {
                self.paused = !self.paused;
                log::debug!("Paused: {}", self.paused);
            }
        }
    }

    /// Fresh simulation and thresholds, unpaused, same RNG stream
    pub fn reset(&mut self) {
        self.sim = Simulation::new(&self.config);
        self.params = MatchParams::sample(&mut self.rng, &self.config);
        self.paused = false;
        self.outcome = None;
        log::info!(
            "New match: target {}, max speed {:.2}",
            self.params.target(),
            self.params.max_speed()
        );
    }

    pub fn snapshot(&self) -> Snapshot {
        self.sim.snapshot()
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn params(&self) -> MatchParams {
        self.params
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
