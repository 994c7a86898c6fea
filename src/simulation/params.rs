//! Physical constants and runtime parameters for the simulation
//!
//! The physics is fixed at compile time. `Parameters` only carries the
//! host-facing settings: scheduler rate and the deterministic seed.

use std::ops::Range;

/// Velocity multiplier applied to every body each tick
pub const DAMPING: f64 = 0.99;

/// A body is at rest when both velocity components are within this bound
pub const SETTLE_SPEED: f64 = 0.1;

/// Satellite angular velocity, radians per tick
pub const ORBIT_STEP: f64 = 0.05;

/// radius = GROWTH_FACTOR * sqrt(mass) after a merge
pub const GROWTH_FACTOR: f64 = 5.0;

pub const FRAGMENT_COUNT: usize = 10;
pub const FRAGMENT_RADIUS: f64 = 10.0;
pub const FRAGMENT_VELOCITY: Range<i32> = -5..5; // per axis, upper bound excluded
pub const FRAGMENT_MASS: Range<i32> = 1..10; // upper bound excluded

/// explosion distance = seed radius * EXPLOSION_SPREAD * multiplier
pub const EXPLOSION_SPREAD: f64 = 2.5;
pub const INITIAL_MULTIPLIER: f64 = 1.0;
pub const REPEAT_MULTIPLIER: f64 = 1.5;

// Seed body placed at startup and immediately fragmented
pub const PRIMARY_RADIUS: f64 = 50.0;
pub const PRIMARY_MASS: f64 = 1000.0;
pub const PRIMARY_ORBIT_RADIUS: f64 = 200.0;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub tick_hz: f64, // scheduler rate
    pub seed: Option<u64>, // deterministic seed, None = entropy
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            tick_hz: 62.5, // 16 ms
            seed: None,
        }
    }
}
