//! Core state types for the fragmentation simulation.
//!
//! - `Body`     a circular body with linear and orbital state
//! - `BodyId`   stable handle that survives removals elsewhere in the list
//! - `Registry` the ordered body list plus the primary handle and tick count
//!
//! The registry is the only mutable state of the simulation. Hosts read it
//! through [`Registry::snapshot`] and never hold references across a tick.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Render color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// Stable body identifier, never reused within a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BodyId(pub u64);

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId, // assigned by Registry::insert
    pub x: NVec2, // position, scene units
    pub v: NVec2, // velocity, scene units per tick
    pub m: f64, // mass
    pub radius: f64, // collision and render radius
    pub color: Rgb,
    pub orbit_radius: f64, // distance from the primary, unused by the primary itself
    pub orbit_angle: f64, // radians around the primary
}

impl Body {
    /// Body with no orbit parameters and a white color.
    /// The id is a placeholder until the body is inserted into a registry.
    pub fn new(x: NVec2, v: NVec2, m: f64, radius: f64) -> Self {
        Self {
            id: BodyId::default(),
            x,
            v,
            m,
            radius,
            color: Rgb::WHITE,
            orbit_radius: 0.0,
            orbit_angle: 0.0,
        }
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn with_orbit(mut self, orbit_radius: f64, orbit_angle: f64) -> Self {
        self.orbit_radius = orbit_radius;
        self.orbit_angle = orbit_angle;
        self
    }
}

/// Read-only view of one body handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyView {
    pub id: BodyId,
    pub x: NVec2,
    pub radius: f64,
    pub color: Rgb,
}

/// Ordered, owning collection of bodies.
///
/// Order is insertion order; removals keep the relative order of survivors.
/// Through the `Registry` methods and the simulation step, the registry holds
/// at least one body and `primary` names a body that is present. Editing
/// `bodies` directly bypasses both guarantees; the step guards against an
/// empty list and a dangling handle rather than assuming them.
#[derive(Debug, Clone)]
pub struct Registry {
    pub bodies: Vec<Body>,
    primary: BodyId,
    next_id: u64,
    pub tick: u64, // completed steps
}

impl Registry {
    /// Registry holding a single body which becomes the primary
    pub fn new(primary: Body) -> Self {
        let mut reg = Self {
            bodies: Vec::new(),
            primary: BodyId::default(),
            next_id: 1,
            tick: 0,
        };
        reg.primary = reg.insert(primary);
        reg
    }

    /// Append a body, stamping it with a fresh id
    pub fn insert(&mut self, mut body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        body.id = id;
        self.bodies.push(body);
        id
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn primary_id(&self) -> BodyId {
        self.primary
    }

    /// Point the primary handle at another body. Ignored if `id` is not present.
    pub fn set_primary(&mut self, id: BodyId) {
        if self.index_of(id).is_some() {
            self.primary = id;
        }
    }

    pub fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn primary(&self) -> Option<&Body> {
        self.get(self.primary)
    }

    pub fn primary_mut(&mut self) -> Option<&mut Body> {
        let id = self.primary;
        self.get_mut(id)
    }

    /// Remove a body, keeping the order of the rest
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let idx = self.index_of(id)?;
        Some(self.bodies.remove(idx))
    }

    /// Translate every body so the primary sits at the frame centre
    pub fn recenter(&mut self, width: f64, height: f64) {
        let Some(primary) = self.primary() else {
            return;
        };
        let offset = NVec2::new(width / 2.0, height / 2.0) - primary.x;
        for b in self.bodies.iter_mut() {
            b.x += offset;
        }
    }

    /// Everything the renderer needs, in registry order
    pub fn snapshot(&self) -> Vec<BodyView> {
        self.bodies
            .iter()
            .map(|b| BodyView {
                id: b.id,
                x: b.x,
                radius: b.radius,
                color: b.color,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: f64, y: f64) -> Body {
        Body::new(NVec2::new(x, y), NVec2::zeros(), 1.0, 10.0)
    }

    #[test]
    fn ids_are_unique_and_not_reused() {
        let mut reg = Registry::new(body_at(0.0, 0.0));
        let a = reg.insert(body_at(1.0, 0.0));
        reg.remove(a);
        let b = reg.insert(body_at(2.0, 0.0));
        assert_ne!(a, b);
        assert_ne!(reg.primary_id(), b);
    }

    #[test]
    fn primary_handle_survives_removal_before_it() {
        let mut reg = Registry::new(body_at(0.0, 0.0));
        let other = reg.insert(body_at(5.0, 0.0));
        reg.set_primary(other);
        let first = reg.bodies[0].id;
        reg.remove(first);
        assert_eq!(reg.primary().map(|b| b.id), Some(other));
        assert_eq!(reg.index_of(other), Some(0));
    }

    #[test]
    fn set_primary_ignores_unknown_ids() {
        let mut reg = Registry::new(body_at(0.0, 0.0));
        let before = reg.primary_id();
        reg.set_primary(BodyId(999));
        assert_eq!(reg.primary_id(), before);
    }

    #[test]
    fn recenter_moves_primary_to_frame_centre() {
        let mut reg = Registry::new(body_at(10.0, 20.0));
        reg.insert(body_at(30.0, 20.0));
        reg.recenter(200.0, 100.0);
        assert_eq!(reg.bodies[0].x, NVec2::new(100.0, 50.0));
        assert_eq!(reg.bodies[1].x, NVec2::new(120.0, 50.0));
    }
}
