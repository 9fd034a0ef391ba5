//! One-tick physics step
//!
//! No dt: one call is one frame. Integrate first, then test the horizontal
//! walls, then the vertical walls. Positions are never clamped, so the ball
//! can overshoot a wall by up to one tick of travel; the flipped velocity
//! carries it back in on the following tick.

use super::rng::MatchRng;
use super::state::{Simulation, Tint};

/// Which wall tests fired during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    /// Left or right wall (vx flipped)
    pub horizontal: bool,
    /// Top or bottom wall (vy flipped)
    pub vertical: bool,
}

impl WallHits {
    /// Bounces scored this tick (0, 1, or 2 on a corner)
    pub fn count(&self) -> u32 {
        self.horizontal as u32 + self.vertical as u32
    }

    pub fn any(&self) -> bool {
        self.horizontal || self.vertical
    }
}

impl Simulation {
    /// Advance one tick. Each wall hit scores a point and re-rolls the tint,
    /// so a corner scores twice and only the second color is visible.
    pub fn step(&mut self, rng: &mut MatchRng) -> WallHits {
        let ball = &mut self.ball;
        ball.pos += ball.vel;

        let mut hits = WallHits::default();
        let r = ball.radius;

        if ball.pos.x - r < 0.0 || ball.pos.x + r > self.arena.width {
            ball.vel.x = -ball.vel.x;
            ball.tint = Tint::random(rng);
            self.score += 1;
            hits.horizontal = true;
            log::debug!("Horizontal bounce at x={:.1}, score {}", ball.pos.x, self.score);
        }

        if ball.pos.y - r < 0.0 || ball.pos.y + r > self.arena.height {
            ball.vel.y = -ball.vel.y;
            ball.tint = Tint::random(rng);
            self.score += 1;
            hits.vertical = true;
            log::debug!("Vertical bounce at y={:.1}, score {}", ball.pos.y, self.score);
        }

        hits
    }

    /// Multiply both velocity components by `factor`
    pub fn scale_speed(&mut self, factor: f64) {
        self.ball.vel *= factor;
    }

    /// Scalar speed, sqrt(vx² + vy²)
    pub fn speed(&self) -> f64 {
        self.ball.vel.length()
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::config::GameConfig;

    fn fresh() -> (Simulation, MatchRng) {
        (Simulation::new(&GameConfig::default()), MatchRng::new(12345))
    }

    #[test]
    fn test_step_no_bounce() {
        let (mut sim, mut rng) = fresh();
        let hits = sim.step(&mut rng);

        assert!(!hits.any());
        assert_eq!(sim.ball.pos, DVec2::new(403.0, 303.0));
        assert_eq!(sim.score, 0);
        assert_eq!(sim.ball.tint, Tint::RED);
    }

    #[test]
    fn test_step_right_wall_overshoots_then_returns() {
        let (mut sim, mut rng) = fresh();
        sim.ball.pos = DVec2::new(779.0, 300.0);
        sim.ball.vel = DVec2::new(3.0, 3.0);

        let hits = sim.step(&mut rng);
        assert_eq!(hits, WallHits { horizontal: true, vertical: false });
        assert_eq!(sim.ball.pos.x, 782.0);
        assert_eq!(sim.ball.vel.x, -3.0);
        assert_eq!(sim.score, 1);

        let hits = sim.step(&mut rng);
        assert!(!hits.any());
        assert_eq!(sim.ball.pos.x, 779.0);
        assert_eq!(sim.ball.vel.x, -3.0);
        assert_eq!(sim.score, 1);
    }

    #[test]
    fn test_step_corner_scores_twice() {
        let (mut sim, mut rng) = fresh();
        sim.ball.pos = DVec2::new(779.0, 579.0);
        sim.ball.vel = DVec2::new(3.0, 3.0);

        let hits = sim.step(&mut rng);
        assert_eq!(hits.count(), 2);
        assert_eq!(sim.ball.vel, DVec2::new(-3.0, -3.0));
        assert_eq!(sim.score, 2);
    }

    #[test]
    fn test_corner_tint_is_second_roll() {
        let (mut sim, mut rng) = fresh();
        sim.ball.pos = DVec2::new(779.0, 579.0);

        // Replay the same stream: first roll is discarded, second is kept
        let mut replay = rng.clone();
        let _first = Tint::random(&mut replay);
        let second = Tint::random(&mut replay);

        sim.step(&mut rng);
        assert_eq!(sim.ball.tint, second);
    }

    #[test]
    fn test_left_and_top_walls() {
        let (mut sim, mut rng) = fresh();
        sim.ball.pos = DVec2::new(21.0, 21.0);
        sim.ball.vel = DVec2::new(-3.0, -3.0);

        let hits = sim.step(&mut rng);
        assert_eq!(hits.count(), 2);
        assert_eq!(sim.ball.vel, DVec2::new(3.0, 3.0));
        assert_eq!(sim.ball.pos, DVec2::new(18.0, 18.0));
    }

    #[test]
    fn test_touching_wall_is_not_a_bounce() {
        let (mut sim, mut rng) = fresh();
        // Lands exactly at x + r == W: strict comparison, no bounce
        sim.ball.pos = DVec2::new(777.0, 300.0);
        sim.ball.vel = DVec2::new(3.0, 0.0);

        assert!(!sim.step(&mut rng).any());
        assert_eq!(sim.ball.pos.x, 780.0);
    }

    #[test]
    fn test_scale_speed() {
        let (mut sim, _) = fresh();
        let before = sim.speed();
        sim.scale_speed(1.2);
        assert!((sim.speed() - before * 1.2).abs() < 1e-12);
        sim.scale_speed(0.8);
        assert!((sim.speed() - before * 1.2 * 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_speed_initial() {
        let (sim, _) = fresh();
        assert!((sim.speed() - 18f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_determinism() {
        let (mut a, mut rng_a) = fresh();
        let (mut b, mut rng_b) = fresh();
        for _ in 0..1000 {
            a.step(&mut rng_a);
            b.step(&mut rng_b);
        }
        assert_eq!(a, b);
    }
}
