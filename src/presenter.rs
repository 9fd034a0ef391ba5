//! Presentation contract
//!
//! The core never draws. Each frame the shell hands its presenter to
//! [`FrameSync::present`], which swaps screens on scene changes and pushes
//! the ball and HUD while a match is on screen.

use crate::scene::{MatchSummary, Scene, SceneRouter};
use crate::sim::{MatchParams, Tint};

/// Anything that can show the game: a GPU canvas, a DOM overlay, a log
pub trait Presenter {
    fn draw_ball(&mut self, x: f64, y: f64, radius: f64, tint: Tint);
    fn set_speed_text(&mut self, speed: f64);
    fn set_score_text(&mut self, score: u32, target: u32);
    fn set_max_speed_text(&mut self, max_speed: f64);
    /// Swap to another screen. Called once per scene change.
    fn show_scene(&mut self, scene: Scene);
}

// ============================================================================
// HUD TEXT
// ============================================================================

pub const WELCOME_TITLE: &str = "Welcome to the Bouncing Ball Game";
pub const START_LABEL: &str = "Start Game";
pub const RESTART_LABEL: &str = "Restart Game";
pub const EXIT_LABEL: &str = "Exit Game";

pub fn speed_text(speed: f64) -> String {
    format!("Speed: {:.2}", speed)
}

pub fn score_text(score: u32, target: u32) -> String {
    format!("Score: {} / {}", score, target)
}

pub fn max_speed_text(max_speed: f64) -> String {
    format!("Max Speed: {:.2}", max_speed)
}

pub fn welcome_text(params: &MatchParams) -> String {
    format!(
        "Win by reaching a score of {}!\nDon't exceed the max speed of {:.2}.",
        params.target(),
        params.max_speed()
    )
}

pub fn end_title(win: bool) -> &'static str {
    if win { "You Win!" } else { "Game Over!" }
}

pub fn final_score_text(summary: &MatchSummary) -> String {
    format!(
        "Final Score: {} / {}",
        summary.score,
        summary.params.target()
    )
}

/// HUD label colors (RGBA), top to bottom
pub mod colors {
    pub const SPEED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const SCORE: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
    pub const MAX_SPEED: [f32; 4] = [1.0, 0.65, 0.0, 1.0];
    pub const WIN: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
    pub const LOSS: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}

/// CSS `rgb()` string for a label color
pub fn css_color(color: [f32; 4]) -> String {
    format!(
        "rgb({}, {}, {})",
        (color[0] * 255.0).round() as u8,
        (color[1] * 255.0).round() as u8,
        (color[2] * 255.0).round() as u8
    )
}

// ============================================================================
// FRAME SYNC
// ============================================================================

/// Remembers which scene the presenter is showing so screens are only
/// swapped on change
#[derive(Debug, Default)]
pub struct FrameSync {
    shown: Option<Scene>,
}

impl FrameSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Option<Scene> {
        self.shown
    }

    /// Push one frame. Call after the frame's tick so the snapshot is current.
    pub fn present<P: Presenter>(&mut self, router: &SceneRouter, presenter: &mut P) {
        let scene = router.scene();
        if self.shown != Some(scene) {
            presenter.show_scene(scene);
            self.shown = Some(scene);
        }

        if scene != Scene::Playing {
            return;
        }

        let controller = router.controller();
        let snap = controller.snapshot();
        let params = controller.params();
        presenter.draw_ball(snap.x, snap.y, snap.radius, snap.tint);
        presenter.set_speed_text(snap.speed);
        presenter.set_score_text(snap.score, params.target());
        presenter.set_max_speed_text(params.max_speed());
    }
}

/// Presenter for the headless native build: logs screens, ignores pixels
#[derive(Debug, Default)]
pub struct LogPresenter {
    score: Option<(u32, u32)>,
    pub frames: u64,
}

impl Presenter for LogPresenter {
    fn draw_ball(&mut self, x: f64, y: f64, _radius: f64, tint: Tint) {
        self.frames += 1;
        log::trace!("Ball at ({:.1}, {:.1}) tint {:?}", x, y, tint);
    }

    fn set_speed_text(&mut self, speed: f64) {
        log::trace!("{}", speed_text(speed));
    }

    fn set_score_text(&mut self, score: u32, target: u32) {
        if self.score != Some((score, target)) {
            self.score = Some((score, target));
            log::debug!("{}", score_text(score, target));
        }
    }

    fn set_max_speed_text(&mut self, max_speed: f64) {
        log::trace!("{}", max_speed_text(max_speed));
    }

    fn show_scene(&mut self, scene: Scene) {
        log::info!("Showing {:?} screen", scene);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::controller::{InputEvent, MatchController};
    use crate::scene::SceneEvent;
    use crate::sim::MatchRng;

    #[derive(Debug, PartialEq)]
    enum Call {
        Ball(f64, f64),
        Speed(String),
        Score(String),
        MaxSpeed(String),
        Scene(Scene),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Presenter for Recorder {
        fn draw_ball(&mut self, x: f64, y: f64, _radius: f64, _tint: Tint) {
            self.calls.push(Call::Ball(x, y));
        }
        fn set_speed_text(&mut self, speed: f64) {
            self.calls.push(Call::Speed(speed_text(speed)));
        }
        fn set_score_text(&mut self, score: u32, target: u32) {
            self.calls.push(Call::Score(score_text(score, target)));
        }
        fn set_max_speed_text(&mut self, max_speed: f64) {
            self.calls.push(Call::MaxSpeed(max_speed_text(max_speed)));
        }
        fn show_scene(&mut self, scene: Scene) {
            self.calls.push(Call::Scene(scene));
        }
    }

    fn router() -> SceneRouter {
        SceneRouter::with_controller(MatchController::with_params(
            GameConfig::default(),
            MatchParams::new(25, 12),
            MatchRng::new(5),
        ))
    }

    #[test]
    fn test_text_formats() {
        assert_eq!(speed_text(18f64.sqrt()), "Speed: 4.24");
        assert_eq!(score_text(3, 25), "Score: 3 / 25");
        assert_eq!(max_speed_text(12.0), "Max Speed: 12.00");
        assert_eq!(
            welcome_text(&MatchParams::new(25, 12)),
            "Win by reaching a score of 25!\nDon't exceed the max speed of 12.00."
        );
        assert_eq!(end_title(true), "You Win!");
        assert_eq!(end_title(false), "Game Over!");
    }

    #[test]
    fn test_final_score_text() {
        let summary = MatchSummary {
            win: false,
            score: 7,
            params: MatchParams::new(25, 12),
        };
        assert_eq!(final_score_text(&summary), "Final Score: 7 / 25");
    }

    #[test]
    fn test_css_color() {
        assert_eq!(css_color(colors::MAX_SPEED), "rgb(255, 166, 0)");
    }

    #[test]
    fn test_welcome_frame_shows_scene_only() {
        let router = router();
        let mut sync = FrameSync::new();
        let mut rec = Recorder::default();

        sync.present(&router, &mut rec);
        sync.present(&router, &mut rec);
        assert_eq!(rec.calls, vec![Call::Scene(Scene::Welcome)]);
    }

    #[test]
    fn test_playing_frame_reads_post_tick_state() {
        let mut router = router();
        let mut sync = FrameSync::new();
        let mut rec = Recorder::default();

        router.handle(SceneEvent::StartPressed);
        router.handle(SceneEvent::Tick);
        sync.present(&router, &mut rec);

        assert_eq!(
            rec.calls,
            vec![
                Call::Scene(Scene::Playing),
                Call::Ball(403.0, 303.0),
                Call::Speed("Speed: 4.24".into()),
                Call::Score("Score: 0 / 25".into()),
                Call::MaxSpeed("Max Speed: 12.00".into()),
            ]
        );
    }

    #[test]
    fn test_end_frame_stops_drawing() {
        let mut router = router();
        let mut sync = FrameSync::new();
        let mut rec = Recorder::default();

        router.handle(SceneEvent::StartPressed);
        for _ in 0..6 {
            router.handle(SceneEvent::Input(InputEvent::SpeedUp));
        }
        router.handle(SceneEvent::Tick);
        sync.present(&router, &mut rec);

        assert_eq!(rec.calls, vec![Call::Scene(Scene::Ended { win: false })]);
        assert_eq!(sync.shown(), Some(Scene::Ended { win: false }));
    }

    #[test]
    fn test_log_presenter_counts_frames() {
        let mut router = router();
        let mut sync = FrameSync::new();
        let mut presenter = LogPresenter::default();

        router.handle(SceneEvent::StartPressed);
        for _ in 0..3 {
            router.handle(SceneEvent::Tick);
            sync.present(&router, &mut presenter);
        }
        assert_eq!(presenter.frames, 3);
    }
}
