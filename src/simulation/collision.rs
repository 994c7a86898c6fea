//! Pairwise collision detection and absorbing merge resolution
//!
//! Every unordered pair (i, j), i < j, is tested once per tick in registry
//! order. On an approaching contact body i takes an impulse along the
//! contact normal and then swallows body j. Consumed bodies are marked and
//! skipped for the rest of the pass, and the list is compacted once at the end.
//!
//! The engine drives a [`CollisionPass`] body by body: body i is tested right
//! after it has been integrated, while every later body still sits where the
//! previous tick left it.

use super::states::{Body, BodyId, NVec2, Registry};
use super::params::GROWTH_FACTOR;

/// One absorption that happened during a collision pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Merge {
    pub survivor: BodyId,
    pub absorbed: BodyId,
    pub mass: f64, // survivor mass after the merge
}

/// Circles touch or overlap
pub fn touching(a: &Body, b: &Body) -> bool {
    (b.x - a.x).norm() <= a.radius + b.radius
}

/// Unit vector from `from` to `to`, `(1, 0)` when the centres coincide
pub fn collision_normal(from: NVec2, to: NVec2) -> NVec2 {
    let d = to - from;
    let mag = d.norm();
    if mag > 0.0 {
        d / mag
    } else {
        NVec2::new(1.0, 0.0)
    }
}

/// Resolve a contact between `bi` and `bj`; returns true if `bj` was absorbed.
///
/// Separating pairs (positive closing speed along the normal) are left alone.
pub fn absorb(bi: &mut Body, bj: &mut Body) -> bool {
    let n = collision_normal(bi.x, bj.x);

    // closing speed along the normal, <= 0 means approaching
    let s = (bj.v - bi.v).dot(&n);
    if s > 0.0 {
        return false;
    }

    // equal and opposite exchange, tangential part untouched
    let impulse = 2.0 * s / (bi.m + bj.m);
    bi.v += impulse * bj.m * n;
    bj.v -= impulse * bi.m * n;

    bi.m += bj.m;
    bi.radius = GROWTH_FACTOR * bi.m.sqrt();
    true
}

/// Tombstones and merges for one sweep over the registry.
///
/// Indices refer to `reg.bodies` as it was when the pass started. Nothing is
/// removed until [`CollisionPass::finish`], so indices stay valid while the
/// registry is being walked.
#[derive(Debug, Clone)]
pub struct CollisionPass {
    removed: Vec<bool>,
    primary: Option<usize>, // follows the primary into whichever body absorbs it
    merges: Vec<Merge>,
}

impl CollisionPass {
    pub fn new(reg: &Registry) -> Self {
        Self {
            removed: vec![false; reg.len()],
            primary: reg.index_of(reg.primary_id()),
            merges: Vec::new(),
        }
    }

    pub fn is_removed(&self, i: usize) -> bool {
        self.removed[i]
    }

    /// Index of the primary body within this pass
    pub fn primary(&self) -> Option<usize> {
        self.primary
    }

    pub fn merges(&self) -> &[Merge] {
        &self.merges
    }

    /// Test body `i` against every later body still alive and absorb the
    /// ones it hits. Later bodies are seen wherever they currently are.
    pub fn collide_later(&mut self, bodies: &mut [Body], i: usize) {
        for j in (i + 1)..bodies.len() {
            if self.removed[j] {
                continue;
            }

            // i < j, so both borrows come from disjoint halves
            let (head, tail) = bodies.split_at_mut(j);
            let bi = &mut head[i];
            let bj = &mut tail[0];

            if !touching(bi, bj) {
                continue;
            }
            if absorb(bi, bj) {
                self.removed[j] = true;
                log::debug!("body {} absorbed body {}, mass now {:.1}", bi.id.0, bj.id.0, bi.m);
                // a body that is absorbing can no longer be absorbed itself,
                // every earlier body has had its turn
                if self.primary == Some(j) {
                    log::debug!("primary {} absorbed, handle moves to {}", bj.id.0, bi.id.0);
                    self.primary = Some(i);
                }
                self.merges.push(Merge {
                    survivor: bi.id,
                    absorbed: bj.id,
                    mass: bi.m,
                });
            }
        }
    }

    /// Drop the absorbed bodies in one go and move the primary handle if it
    /// changed hands
    pub fn finish(self, reg: &mut Registry) -> Vec<Merge> {
        if self.merges.is_empty() {
            return self.merges;
        }

        let heir = self.primary.and_then(|p| reg.bodies.get(p)).map(|b| b.id);
        let mut flags = self.removed.into_iter();
        reg.bodies.retain(|_| !flags.next().unwrap_or(false));

        if let Some(heir) = heir {
            reg.set_primary(heir);
        }
        self.merges
    }
}
