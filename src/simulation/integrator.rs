//! Fixed-step explicit Euler integration with wall reflection and damping
//!
//! The timestep is one tick, so `x += v` with no scaling.

use super::states::Body;
use super::params::DAMPING;

/// Advance one body by one tick.
///
/// Satellites are integrated too even though orbit placement overwrites
/// their position right after; their velocity still matters for collisions
/// and settling.
pub fn euler_reflect(b: &mut Body, width: f64, height: f64) {
    // x_n+1 = x_n + v_n
    b.x += b.v;
    reflect_walls(b, width, height);
    b.v *= DAMPING;
}

/// Clamp the body inside the frame and flip the velocity component that
/// crossed a wall. Clamp happens first so the body never sits past the edge.
pub fn reflect_walls(b: &mut Body, width: f64, height: f64) {
    let r = b.radius;

    if b.x.x < r {
        b.x.x = r;
        b.v.x = -b.v.x;
    } else if b.x.x > width - r {
        b.x.x = width - r;
        b.v.x = -b.v.x;
    }

    if b.x.y < r {
        b.x.y = r;
        b.v.y = -b.v.y;
    } else if b.x.y > height - r {
        b.x.y = height - r;
        b.v.y = -b.v.y;
    }
}
