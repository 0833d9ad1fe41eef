//! Overlap tests between collision shapes
//!
//! Circles and axis-aligned boxes only. Every test answers the same question:
//! how far, and along which direction, must A move to stop overlapping B.

use glam::Vec2;

use super::actor::Shape;

/// Result of a collision check
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Whether the shapes overlap
    pub hit: bool,
    /// Unit normal pointing from B toward A (direction to push A out)
    pub normal: Vec2,
    /// Penetration depth along the normal
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }

    fn hit(normal: Vec2, penetration: f32) -> Self {
        Self {
            hit: true,
            normal,
            penetration,
        }
    }

    /// Same contact seen from the other body
    pub fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            ..self
        }
    }
}

/// Check two placed shapes against each other
pub fn collide(pos_a: Vec2, shape_a: &Shape, pos_b: Vec2, shape_b: &Shape) -> CollisionResult {
    match (*shape_a, *shape_b) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            circle_circle(pos_a, ra, pos_b, rb)
        }
        (Shape::Rect { half_extents: ha }, Shape::Rect { half_extents: hb }) => {
            rect_rect(pos_a, ha, pos_b, hb)
        }
        (Shape::Circle { radius }, Shape::Rect { half_extents }) => {
            circle_rect(pos_a, radius, pos_b, half_extents)
        }
        (Shape::Rect { half_extents }, Shape::Circle { radius }) => {
            circle_rect(pos_b, radius, pos_a, half_extents).flipped()
        }
    }
}

pub fn circle_circle(pos_a: Vec2, radius_a: f32, pos_b: Vec2, radius_b: f32) -> CollisionResult {
    let delta = pos_a - pos_b;
    let dist = delta.length();
    let penetration = radius_a + radius_b - dist;
    if penetration <= 0.0 {
        return CollisionResult::miss();
    }
    // Concentric circles: push straight up
    let normal = if dist > f32::EPSILON { delta / dist } else { Vec2::Y };
    CollisionResult::hit(normal, penetration)
}

pub fn rect_rect(pos_a: Vec2, half_a: Vec2, pos_b: Vec2, half_b: Vec2) -> CollisionResult {
    let delta = pos_a - pos_b;
    let overlap = half_a + half_b - delta.abs();
    if overlap.x <= 0.0 || overlap.y <= 0.0 {
        return CollisionResult::miss();
    }
    // Separate along the axis of least overlap
    if overlap.x < overlap.y {
        CollisionResult::hit(Vec2::new(delta.x.signum(), 0.0), overlap.x)
    } else {
        CollisionResult::hit(Vec2::new(0.0, delta.y.signum()), overlap.y)
    }
}

/// Circle A against axis-aligned box B
pub fn circle_rect(center: Vec2, radius: f32, rect_pos: Vec2, half: Vec2) -> CollisionResult {
    let local = center - rect_pos;
    let closest = local.clamp(-half, half);
    let diff = local - closest;
    let dist = diff.length();

    if dist > f32::EPSILON {
        let penetration = radius - dist;
        if penetration <= 0.0 {
            return CollisionResult::miss();
        }
        return CollisionResult::hit(diff / dist, penetration);
    }

    // Center is inside the box
    let overlap = half + Vec2::splat(radius) - local.abs();
    if overlap.x < overlap.y {
        CollisionResult::hit(Vec2::new(local.x.signum(), 0.0), overlap.x)
    } else {
        CollisionResult::hit(Vec2::new(0.0, local.y.signum()), overlap.y)
    }
}
