//! Screen state machine
//!
//! Welcome → Playing → Ended → Playing, with Exit accepted everywhere.
//! The router owns the active match; ticks and input only reach it while
//! Playing.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::controller::{InputEvent, MatchController, Outcome};
use crate::sim::MatchParams;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scene {
    Welcome,
    Playing,
    Ended { win: bool },
}

impl Scene {
    /// The tick driver runs only on the playing screen
    pub fn is_ticking(&self) -> bool {
        matches!(self, Scene::Playing)
    }
}

/// Events the router reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    StartPressed,
    RestartPressed,
    ExitPressed,
    Tick,
    Input(InputEvent),
    WinSignaled,
    LossSignaled,
}

/// Result of feeding one event to the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    /// Event was valid for the scene it arrived in
    pub accepted: bool,
    pub from: Scene,
    pub to: Scene,
    pub event: SceneEvent,
}

impl TransitionResult {
    /// Scene changed (a tick or input that stays in Playing is not a change)
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Final numbers shown on the end screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub win: bool,
    pub score: u32,
    pub params: MatchParams,
}

/// Screen router holding the current match
#[derive(Debug, Clone)]
pub struct SceneRouter {
    scene: Scene,
    controller: MatchController,
    exit_requested: bool,
}

impl SceneRouter {
    /// Start on the welcome screen. The controller is created here, so the
    /// thresholds it samples are the ones the welcome text advertises.
    pub fn new(config: GameConfig) -> Self {
        Self::with_controller(MatchController::new(config))
    }

    pub fn with_controller(controller: MatchController) -> Self {
        let params = controller.params();
        log::info!(
            "Welcome: target {}, max speed {:.2}",
            params.target(),
            params.max_speed()
        );
        Self {
            scene: Scene::Welcome,
            controller,
            exit_requested: false,
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn controller(&self) -> &MatchController {
        &self.controller
    }

    /// Thresholds shown on the welcome screen
    pub fn welcome_params(&self) -> MatchParams {
        self.controller.params()
    }

    /// Final score and thresholds, available only on the end screen
    pub fn summary(&self) -> Option<MatchSummary> {
        match self.scene {
            Scene::Ended { win } => Some(MatchSummary {
                win,
                score: self.controller.snapshot().score,
                params: self.controller.params(),
            }),
            _ => None,
        }
    }

    /// Exit was pressed; the shell should shut down
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Feed one event. Events that make no sense for the current scene
    /// (a late tick on the end screen, a restart on the welcome screen)
    /// are rejected without side effects.
    pub fn handle(&mut self, event: SceneEvent) -> TransitionResult {
        let from = self.scene;

        if self.exit_requested {
            return self.reject(from, event);
        }

        let to = match (self.scene, event) {
            (_, SceneEvent::ExitPressed) => {
                self.exit_requested = true;
                log::info!("Exit requested from {:?}", from);
                from
            }

            (Scene::Welcome, SceneEvent::StartPressed) => Scene::Playing,

            (Scene::Playing, SceneEvent::Tick) => match self.controller.on_tick() {
                Some(outcome) => {
                    let signal = match outcome {
                        Outcome::Win => SceneEvent::WinSignaled,
                        Outcome::Loss => SceneEvent::LossSignaled,
                    };
                    let result = self.handle(signal);
                    return TransitionResult { event, ..result };
                }
                None => Scene::Playing,
            },
            (Scene::Playing, SceneEvent::Input(input)) => {
                self.controller.on_input(input);
                Scene::Playing
            }
            (Scene::Playing, SceneEvent::WinSignaled) => Scene::Ended { win: true },
            (Scene::Playing, SceneEvent::LossSignaled) => Scene::Ended { win: false },

            (Scene::Ended { .. }, SceneEvent::RestartPressed) => {
                self.controller.reset();
                Scene::Playing
            }

            _ => return self.reject(from, event),
        };

        if from != to {
            log::info!("Scene {:?} -> {:?}", from, to);
        }
        self.scene = to;
        TransitionResult {
            accepted: true,
            from,
            to,
            event,
        }
    }

    fn reject(&self, from: Scene, event: SceneEvent) -> TransitionResult {
        // Ticks keep arriving for a frame or two after a match ends
        if event != SceneEvent::Tick {
            log::warn!("Ignoring {:?} in {:?}", event, from);
        }
        TransitionResult {
            accepted: false,
            from,
            to: from,
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::MatchRng;

    fn router(target: u32, max_speed: u32) -> SceneRouter {
        SceneRouter::with_controller(MatchController::with_params(
            GameConfig::default(),
            MatchParams::new(target, max_speed),
            MatchRng::new(4242),
        ))
    }

    /// Drive a started router into a loss via overspeed
    fn lose(router: &mut SceneRouter) -> TransitionResult {
        for _ in 0..6 {
            router.handle(SceneEvent::Input(InputEvent::SpeedUp));
        }
        router.handle(SceneEvent::Tick)
    }

    #[test]
    fn test_initial_scene() {
        let router = router(30, 12);
        assert_eq!(router.scene(), Scene::Welcome);
        assert_eq!(router.welcome_params(), MatchParams::new(30, 12));
        assert!(router.summary().is_none());
        assert!(!router.exit_requested());
    }

    #[test]
    fn test_start_keeps_welcome_params() {
        let mut router = router(30, 12);
        let result = router.handle(SceneEvent::StartPressed);
        assert!(result.accepted && result.changed());
        assert_eq!(router.scene(), Scene::Playing);
        assert_eq!(router.controller().params(), MatchParams::new(30, 12));
    }

    #[test]
    fn test_tick_ignored_outside_playing() {
        let mut router = router(30, 12);
        let result = router.handle(SceneEvent::Tick);
        assert!(!result.accepted);
        assert_eq!(router.controller().snapshot().x, 400.0);
    }

    #[test]
    fn test_input_ignored_on_welcome() {
        let mut router = router(30, 12);
        router.handle(SceneEvent::Input(InputEvent::TogglePause));
        assert!(!router.controller().is_paused());
    }

    #[test]
    fn test_loss_flow_and_summary() {
        let mut router = router(50, 10);
        router.handle(SceneEvent::StartPressed);

        let result = lose(&mut router);
        assert!(result.accepted);
        assert_eq!(result.event, SceneEvent::Tick);
        assert_eq!(result.to, Scene::Ended { win: false });
        assert!(!router.scene().is_ticking());

        let summary = router.summary().unwrap();
        assert!(!summary.win);
        assert_eq!(summary.params, MatchParams::new(50, 10));

        // Late tick on the end screen changes nothing
        let result = router.handle(SceneEvent::Tick);
        assert!(!result.accepted);
        assert_eq!(router.summary(), Some(summary));
    }

    #[test]
    fn test_win_flow() {
        let mut router = router(20, 15);
        router.handle(SceneEvent::StartPressed);

        let mut ticks = 0;
        while router.scene() == Scene::Playing {
            router.handle(SceneEvent::Tick);
            ticks += 1;
            assert!(ticks < 100_000, "match never ended");
        }
        assert_eq!(router.scene(), Scene::Ended { win: true });
        // A corner on the last tick can overshoot by one
        assert!(router.summary().unwrap().score >= 20);
    }

    #[test]
    fn test_restart_resets_match() {
        let mut router = router(50, 10);
        router.handle(SceneEvent::StartPressed);
        lose(&mut router);

        let result = router.handle(SceneEvent::RestartPressed);
        assert_eq!(result.to, Scene::Playing);
        let snap = router.controller().snapshot();
        assert_eq!((snap.x, snap.y, snap.score), (400.0, 300.0, 0));
        assert!((snap.speed - 18f64.sqrt()).abs() < 1e-12);
        assert_eq!(router.controller().outcome(), None);
    }

    #[test]
    fn test_restart_rejected_while_playing() {
        let mut router = router(50, 10);
        router.handle(SceneEvent::StartPressed);
        router.handle(SceneEvent::Tick);
        let result = router.handle(SceneEvent::RestartPressed);
        assert!(!result.accepted);
        assert_eq!(router.controller().snapshot().x, 403.0);
    }

    #[test]
    fn test_explicit_signals() {
        let mut router = router(50, 10);
        router.handle(SceneEvent::StartPressed);
        router.handle(SceneEvent::WinSignaled);
        assert_eq!(router.scene(), Scene::Ended { win: true });
    }

    #[test]
    fn test_exit_from_every_scene() {
        let mut welcome = router(50, 10);
        assert!(welcome.handle(SceneEvent::ExitPressed).accepted);
        assert!(welcome.exit_requested());

        let mut playing = router(50, 10);
        playing.handle(SceneEvent::StartPressed);
        playing.handle(SceneEvent::ExitPressed);
        assert!(playing.exit_requested());

        let mut ended = router(50, 10);
        ended.handle(SceneEvent::StartPressed);
        lose(&mut ended);
        ended.handle(SceneEvent::ExitPressed);
        assert!(ended.exit_requested());

        // Nothing is processed after exit
        assert!(!ended.handle(SceneEvent::RestartPressed).accepted);
    }
}
