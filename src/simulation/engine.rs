//! The simulation step
//!
//! `Engine` owns everything the step needs besides the registry itself: the
//! random source used by fragmentation, the settling phase, and a queued
//! position override for the primary coming from the host's drag input.
//!
//! One call to [`Engine::step`] runs, in order:
//! 1. queued primary override
//! 2. a sweep over the bodies in registry order; for each body still alive:
//!    - Euler integration, wall reflection, damping
//!    - collisions against every later body, which has not moved yet this tick
//!    - placement on its orbit around the primary, unless it is the primary
//! 3. compaction of the bodies absorbed during the sweep
//! 4. settling check, firing one fragmentation when everything is at rest

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::collision::CollisionPass;
use super::fragmentation::{fragment, is_settled};
use super::integrator::euler_reflect;
use super::orbit::place_on_orbit;
use super::params::{Parameters, REPEAT_MULTIPLIER};
use super::states::{BodyId, NVec2, Registry};

/// Settling state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Active,
    /// Everything came to rest this tick; a fragmentation has just fired
    Settled,
}

/// What happened during one step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub merges: usize,
    pub exploded: Option<BodyId>, // seed of the fragmentation fired this tick
    pub phase: Phase,
}

pub struct Engine {
    rng: ChaCha8Rng,
    phase: Phase,
    explosions: u64,
    pending_override: Option<NVec2>,
}

impl Engine {
    pub fn new(params: &Parameters) -> Self {
        let rng = match params.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(rng)
    }

    pub fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            phase: Phase::Active,
            explosions: 0,
            pending_override: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Fragmentation events fired so far, the startup one included
    pub fn explosions(&self) -> u64 {
        self.explosions
    }

    /// Ask for the primary to be moved to `x` at the start of the next step.
    /// A later request replaces an earlier one that has not been applied yet.
    pub fn queue_override(&mut self, x: NVec2) {
        self.pending_override = Some(x);
    }

    pub fn pending_override(&self) -> Option<NVec2> {
        self.pending_override
    }

    /// Fragment `seed` with the given multiplier using the engine's RNG
    pub fn fragment(&mut self, reg: &mut Registry, seed: BodyId, multiplier: f64) -> Vec<BodyId> {
        let ids = fragment(reg, seed, multiplier, &mut self.rng);
        if !ids.is_empty() {
            self.explosions += 1;
        }
        ids
    }

    /// Advance the simulation by one tick inside a `width` x `height` frame
    pub fn step(&mut self, reg: &mut Registry, width: f64, height: f64) -> StepReport {
        if reg.is_empty() {
            log::error!("step called on an empty registry, ignoring");
            return StepReport::default();
        }

        if let Some(x) = self.pending_override.take() {
            if let Some(primary) = reg.primary_mut() {
                primary.x = x;
            }
        }

        let merges = sweep(reg, width, height);

        let mut report = StepReport {
            merges,
            ..Default::default()
        };

        if is_settled(reg) {
            self.phase = Phase::Settled;
            let seed = reg.bodies[self.rng.gen_range(0..reg.len())].id;
            self.fragment(reg, seed, REPEAT_MULTIPLIER);
            report.exploded = Some(seed);
        } else {
            self.phase = Phase::Active;
        }
        report.phase = self.phase;

        reg.tick += 1;
        debug_assert!(!reg.is_empty(), "registry collapsed after tick {}", reg.tick);
        report
    }
}

/// Integrate, collide and place each body in turn, then compact once.
/// Returns the number of merges.
fn sweep(reg: &mut Registry, width: f64, height: f64) -> usize {
    let mut pass = CollisionPass::new(reg);

    for i in 0..reg.len() {
        if pass.is_removed(i) {
            continue;
        }
        euler_reflect(&mut reg.bodies[i], width, height);
        pass.collide_later(&mut reg.bodies, i);

        // the primary may have changed hands while body i collided
        if let Some(p) = pass.primary().filter(|&p| p != i) {
            let center = reg.bodies[p].x;
            place_on_orbit(&mut reg.bodies[i], center);
        }
    }

    pass.finish(reg).len()
}
