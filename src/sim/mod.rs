//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - One step per tick, no dt scaling
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod params;
pub mod rng;
pub mod state;
pub mod tick;

pub use params::MatchParams;
pub use rng::MatchRng;
pub use state::{Arena, Ball, Simulation, Snapshot, Tint};
pub use tick::WallHits;
