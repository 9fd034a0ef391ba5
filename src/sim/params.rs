//! Per-match win/loss thresholds

use serde::{Deserialize, Serialize};

use super::rng::MatchRng;
use crate::config::GameConfig;

/// Target bounce count and speed cap, fixed for the whole match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchParams {
    target: u32,
    max_speed: f64,
}

impl MatchParams {
    pub fn new(target: u32, max_speed: u32) -> Self {
        Self {
            target,
            max_speed: max_speed as f64,
        }
    }

    /// Draw target then max speed from the configured ranges
    pub fn sample(rng: &mut MatchRng, config: &GameConfig) -> Self {
        let (t_lo, t_hi) = config.target_range;
        let (s_lo, s_hi) = config.max_speed_range;
        let target = rng.uniform(t_lo, t_hi);
        let max_speed = rng.uniform(s_lo, s_hi);
        Self::new(target, max_speed)
    }

    /// Bounces needed to win
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Speed above which the match is lost
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_within_ranges() {
        let config = GameConfig::default();
        let mut rng = MatchRng::new(12345);
        for _ in 0..500 {
            let params = MatchParams::sample(&mut rng, &config);
            assert!((20..=50).contains(&params.target()));
            assert!((10.0..=15.0).contains(&params.max_speed()));
            assert_eq!(params.max_speed().fract(), 0.0);
        }
    }

    #[test]
    fn test_new_stores_speed_as_real() {
        let params = MatchParams::new(20, 12);
        assert_eq!(params.target(), 20);
        assert_eq!(params.max_speed(), 12.0);
    }
}
