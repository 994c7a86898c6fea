//! Settling detection and the fragmentation event
//!
//! Once every body has come to rest the engine picks one body and replaces
//! it with a ring of `FRAGMENT_COUNT` small bodies that start co-located
//! at the seed's position and fly apart with random integer velocities.

use std::f64::consts::PI;

use rand::Rng;

use super::states::{Body, BodyId, NVec2, Registry, Rgb};
use super::params::{
    EXPLOSION_SPREAD, FRAGMENT_COUNT, FRAGMENT_MASS, FRAGMENT_RADIUS, FRAGMENT_VELOCITY, SETTLE_SPEED,
};

/// Every body is within `SETTLE_SPEED` on both axes
pub fn is_settled(reg: &Registry) -> bool {
    reg.bodies
        .iter()
        .all(|b| b.v.x.abs() <= SETTLE_SPEED && b.v.y.abs() <= SETTLE_SPEED)
}

/// Angle of the `index`-th fragment on the ring
pub fn ring_angle(index: usize) -> f64 {
    2.0 * PI * index as f64 / FRAGMENT_COUNT as f64
}

/// Replace `seed` with `FRAGMENT_COUNT` fragments appended at the end.
///
/// Returns the new ids, or an empty vec if `seed` is not in the registry.
/// When the seed is the primary, the handle moves to the first surviving
/// body, or to the first fragment if nothing else is left.
pub fn fragment<R: Rng>(
    reg: &mut Registry,
    seed: BodyId,
    multiplier: f64,
    rng: &mut R,
) -> Vec<BodyId> {
    let was_primary = reg.primary_id() == seed;
    let Some(seed_body) = reg.remove(seed) else {
        log::warn!("fragmentation seed {} not found", seed.0);
        return Vec::new();
    };

    let explosion_distance = seed_body.radius * EXPLOSION_SPREAD * multiplier;
    let survivor = reg.bodies.first().map(|b| b.id);

    let ids: Vec<BodyId> = (0..FRAGMENT_COUNT)
        .map(|i| {
            let v = NVec2::new(
                rng.gen_range(FRAGMENT_VELOCITY) as f64,
                rng.gen_range(FRAGMENT_VELOCITY) as f64,
            );
            let m = rng.gen_range(FRAGMENT_MASS) as f64;
            let color = Rgb(rng.gen(), rng.gen(), rng.gen());

            let body = Body::new(seed_body.x, v, m, FRAGMENT_RADIUS)
                .with_color(color)
                .with_orbit(explosion_distance * 2.0, ring_angle(i));
            reg.insert(body)
        })
        .collect();

    if was_primary {
        // ids is never empty, FRAGMENT_COUNT > 0
        if let Some(heir) = survivor.or_else(|| ids.first().copied()) {
            log::debug!("primary {} fragmented, handle moves to {}", seed.0, heir.0);
            reg.set_primary(heir);
        }
    }

    log::info!(
        "body {} fragmented (multiplier {:.1}, orbit radius {:.1}), {} bodies",
        seed.0,
        multiplier,
        explosion_distance * 2.0,
        reg.len()
    );

    ids
}
