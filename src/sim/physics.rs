//! Rigid-body physics world
//!
//! The game logic only talks to [`PhysicsWorld`]. [`SimpleWorld`] is the
//! built-in implementation: deterministic, handle-ordered, semi-implicit Euler
//! with axis-aligned boxes and circles. Good enough for an arcade game where
//! nothing rotates.

use std::collections::{BTreeMap, BTreeSet};

use glam::Vec2;

use super::actor::{BodyKind, Shape};
use super::collision::collide;

/// Handle to a body owned by a physics world (never reused)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyHandle(pub u32);

/// Construction parameters for a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDef {
    pub kind: BodyKind,
    pub shape: Shape,
    pub position: Vec2,
    pub velocity: Vec2,
    pub density: f32,
    pub friction: f32,
    pub gravity_scale: f32,
}

/// Two bodies started touching during the last step (`a < b`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Contact {
    pub a: BodyHandle,
    pub b: BodyHandle,
}

impl Contact {
    fn new(x: BodyHandle, y: BodyHandle) -> Self {
        if x < y { Self { a: x, b: y } } else { Self { a: y, b: x } }
    }

    /// Whether this contact involves `handle`
    pub fn involves(&self, handle: BodyHandle) -> bool {
        self.a == handle || self.b == handle
    }
}

/// Read-only view of a body, for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyView {
    pub handle: BodyHandle,
    pub kind: BodyKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub shape: Shape,
}

/// What the game logic needs from a physics engine
///
/// Setters and queries on unknown handles are no-ops / `None`.
pub trait PhysicsWorld {
    fn create_body(&mut self, def: &BodyDef) -> BodyHandle;
    /// Returns false if the handle was unknown
    fn destroy_body(&mut self, handle: BodyHandle) -> bool;

    fn position(&self, handle: BodyHandle) -> Option<Vec2>;
    fn set_position(&mut self, handle: BodyHandle, position: Vec2);
    fn velocity(&self, handle: BodyHandle) -> Option<Vec2>;
    fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec2);
    fn mass(&self, handle: BodyHandle) -> Option<f32>;
    /// Accumulated until the next step, then cleared
    fn apply_force(&mut self, handle: BodyHandle, force: Vec2);

    /// Advance the simulation by `dt` seconds
    fn step(&mut self, dt: f32);
    /// Contacts that began during steps since the last drain
    fn drain_contacts(&mut self) -> Vec<Contact>;

    fn body(&self, handle: BodyHandle) -> Option<BodyView>;
    fn bodies(&self) -> Vec<BodyView>;
    fn body_count(&self) -> usize;
}

#[derive(Debug, Clone)]
struct Body {
    kind: BodyKind,
    shape: Shape,
    position: Vec2,
    velocity: Vec2,
    force: Vec2,
    mass: f32,
    friction: f32,
    gravity_scale: f32,
}

impl Body {
    fn view(&self, handle: BodyHandle) -> BodyView {
        BodyView {
            handle,
            kind: self.kind,
            position: self.position,
            velocity: self.velocity,
            shape: self.shape,
        }
    }
}

/// Built-in deterministic physics world
#[derive(Debug, Clone)]
pub struct SimpleWorld {
    gravity: Vec2,
    bodies: BTreeMap<BodyHandle, Body>,
    /// Pairs overlapping at the end of the last step
    touching: BTreeSet<Contact>,
    contacts: Vec<Contact>,
    next_handle: u32,
}

impl SimpleWorld {
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity,
            bodies: BTreeMap::new(),
            touching: BTreeSet::new(),
            contacts: Vec::new(),
            next_handle: 1,
        }
    }

    fn integrate(&mut self, dt: f32) {
        let gravity = self.gravity;
        for body in self.bodies.values_mut() {
            match body.kind {
                BodyKind::Static => {}
                BodyKind::Kinematic => {
                    body.position += body.velocity * dt;
                }
                BodyKind::Dynamic => {
                    let accel = gravity * body.gravity_scale + body.force / body.mass;
                    body.velocity += accel * dt;
                    body.position += body.velocity * dt;
                }
            }
            body.force = Vec2::ZERO;
        }
    }

    /// Detect overlaps, report new ones, push dynamic bodies out of solid ones
    fn resolve_overlaps(&mut self) {
        let handles: Vec<BodyHandle> = self.bodies.keys().copied().collect();
        let mut now_touching = BTreeSet::new();

        for (i, &ha) in handles.iter().enumerate() {
            for &hb in &handles[i + 1..] {
                let (Some(a), Some(b)) = (self.bodies.get(&ha), self.bodies.get(&hb)) else {
                    continue;
                };
                let a_dynamic = a.kind == BodyKind::Dynamic;
                let b_dynamic = b.kind == BodyKind::Dynamic;
                if !a_dynamic && !b_dynamic {
                    continue;
                }

                let result = collide(a.position, &a.shape, b.position, &b.shape);
                if !result.hit {
                    continue;
                }

                let contact = Contact::new(ha, hb);
                now_touching.insert(contact);
                if !self.touching.contains(&contact) {
                    self.contacts.push(contact);
                }

                // Dynamic pairs are reported but pass through each other
                if a_dynamic && b_dynamic {
                    continue;
                }
                let (dyn_handle, surface_vel, surface_friction, normal) = if a_dynamic {
                    (ha, b.velocity, b.friction, result.normal)
                } else {
                    (hb, a.velocity, a.friction, -result.normal)
                };
                let penetration = result.penetration;
                if let Some(body) = self.bodies.get_mut(&dyn_handle) {
                    body.position += normal * penetration;

                    let relative = body.velocity - surface_vel;
                    let normal_speed = relative.dot(normal);
                    let tangent = relative - normal * normal_speed;
                    let friction = (body.friction * surface_friction).sqrt().clamp(0.0, 1.0);

                    // Cancel approach, keep separation
                    let normal_part = normal * normal_speed.max(0.0);
                    body.velocity = surface_vel + normal_part + tangent * (1.0 - friction);
                }
            }
        }

        self.touching = now_touching;
    }
}

impl Default for SimpleWorld {
    fn default() -> Self {
        Self::new(Vec2::new(0.0, crate::consts::GRAVITY))
    }
}

impl PhysicsWorld for SimpleWorld {
    fn create_body(&mut self, def: &BodyDef) -> BodyHandle {
        let handle = BodyHandle(self.next_handle);
        self.next_handle += 1;

        let mass = match def.kind {
            BodyKind::Dynamic => (def.density * def.shape.area()).max(f32::EPSILON),
            BodyKind::Static | BodyKind::Kinematic => f32::INFINITY,
        };
        let velocity = match def.kind {
            BodyKind::Static => Vec2::ZERO,
            BodyKind::Kinematic | BodyKind::Dynamic => def.velocity,
        };
        self.bodies.insert(
            handle,
            Body {
                kind: def.kind,
                shape: def.shape,
                position: def.position,
                velocity,
                force: Vec2::ZERO,
                mass,
                friction: def.friction,
                gravity_scale: def.gravity_scale,
            },
        );
        handle
    }

    fn destroy_body(&mut self, handle: BodyHandle) -> bool {
        let removed = self.bodies.remove(&handle).is_some();
        if removed {
            self.touching.retain(|c| !c.involves(handle));
            self.contacts.retain(|c| !c.involves(handle));
        }
        removed
    }

    fn position(&self, handle: BodyHandle) -> Option<Vec2> {
        self.bodies.get(&handle).map(|b| b.position)
    }

    fn set_position(&mut self, handle: BodyHandle, position: Vec2) {
        if let Some(body) = self.bodies.get_mut(&handle) {
            body.position = position;
        }
    }

    fn velocity(&self, handle: BodyHandle) -> Option<Vec2> {
        self.bodies.get(&handle).map(|b| b.velocity)
    }

    fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec2) {
        if let Some(body) = self.bodies.get_mut(&handle) {
            if body.kind != BodyKind::Static {
                body.velocity = velocity;
            }
        }
    }

    fn mass(&self, handle: BodyHandle) -> Option<f32> {
        self.bodies.get(&handle).map(|b| b.mass)
    }

    fn apply_force(&mut self, handle: BodyHandle, force: Vec2) {
        if let Some(body) = self.bodies.get_mut(&handle) {
            body.force += force;
        }
    }

    fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        self.integrate(dt);
        self.resolve_overlaps();
    }

    fn drain_contacts(&mut self) -> Vec<Contact> {
        std::mem::take(&mut self.contacts)
    }

    fn body(&self, handle: BodyHandle) -> Option<BodyView> {
        self.bodies.get(&handle).map(|b| b.view(handle))
    }

    fn bodies(&self) -> Vec<BodyView> {
        self.bodies.iter().map(|(h, b)| b.view(*h)).collect()
    }

    fn body_count(&self) -> usize {
        self.bodies.len()
    }
}
