//! Satellite placement around the primary body
//!
//! Placement happens right after a satellite has been integrated and
//! collided, so it has the final word on where the satellite is drawn. A
//! satellite's velocity is left as-is: it only feeds collision response and
//! settling, never its own path.

use super::states::{Body, NVec2};
use super::params::ORBIT_STEP;

/// Position on the orbit circle of radius `orbit_radius` at `angle`
pub fn orbit_position(center: NVec2, orbit_radius: f64, angle: f64) -> NVec2 {
    center + orbit_radius * NVec2::new(angle.cos(), angle.sin())
}

/// Put a satellite on its orbit around `center` and advance its angle
pub fn place_on_orbit(b: &mut Body, center: NVec2) {
    b.x = orbit_position(center, b.orbit_radius, b.orbit_angle);
    b.orbit_angle += ORBIT_STEP;
}
