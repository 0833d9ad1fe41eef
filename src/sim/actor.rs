//! Actor variants and their physical descriptions
//!
//! Actors are a closed set. Each kind knows how to describe itself as a rigid
//! body, which is all the registry needs to put it in the world.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Stable identity of an actor (never reused within a run)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// What an actor is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    /// The playable bird
    Bird,
    /// Adversary walking on the ground
    Npc,
    /// Ground segment, recycled and never destroyed
    Ground,
    /// Projectile dropped by the bird
    Poop,
}

/// How the physics world treats a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    /// Never moves
    Static,
    /// Moves by velocity only, ignores gravity and contacts
    Kinematic,
    /// Fully simulated
    Dynamic,
}

/// Collision shape, centered on the body position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle { radius: f32 },
    /// Axis-aligned box given by half extents
    Rect { half_extents: Vec2 },
}

impl Shape {
    pub fn area(&self) -> f32 {
        match *self {
            Shape::Circle { radius } => std::f32::consts::PI * radius * radius,
            Shape::Rect { half_extents } => 4.0 * half_extents.x * half_extents.y,
        }
    }

    /// Half extents of the bounding box
    pub fn half_extents(&self) -> Vec2 {
        match *self {
            Shape::Circle { radius } => Vec2::splat(radius),
            Shape::Rect { half_extents } => half_extents,
        }
    }
}

/// Everything needed to build a body for an actor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalDesc {
    pub body_kind: BodyKind,
    pub shape: Shape,
    pub density: f32,
    pub friction: f32,
    pub gravity_scale: f32,
}

/// A registered game actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub kind: ActorKind,
}

impl ActorKind {
    /// Physical description of this kind under the given tuning
    pub fn physical(&self, tuning: &Tuning) -> PhysicalDesc {
        match self {
            ActorKind::Bird => PhysicalDesc {
                body_kind: BodyKind::Dynamic,
                shape: Shape::Circle {
                    radius: tuning.bird_radius,
                },
                density: 1.0,
                friction: 0.3,
                gravity_scale: 1.0,
            },
            ActorKind::Npc => PhysicalDesc {
                body_kind: BodyKind::Dynamic,
                shape: Shape::Rect {
                    half_extents: Vec2::new(tuning.npc_half_width, tuning.npc_half_height),
                },
                density: 1.5,
                friction: 1.0,
                gravity_scale: 1.0,
            },
            ActorKind::Ground => PhysicalDesc {
                body_kind: BodyKind::Kinematic,
                shape: Shape::Rect {
                    half_extents: Vec2::new(tuning.ground_width / 2.0, tuning.ground_height / 2.0),
                },
                density: 0.0,
                friction: 1.0,
                gravity_scale: 0.0,
            },
            ActorKind::Poop => PhysicalDesc {
                body_kind: BodyKind::Dynamic,
                shape: Shape::Circle {
                    radius: tuning.poop_radius,
                },
                density: 0.5,
                friction: 1.0,
                gravity_scale: 1.0,
            },
        }
    }

    /// Whether a kind is removed when it leaves the visible field
    pub fn is_transient(&self) -> bool {
        matches!(self, ActorKind::Npc | ActorKind::Poop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_is_kinematic_and_weightless() {
        let desc = ActorKind::Ground.physical(&Tuning::default());
        assert_eq!(desc.body_kind, BodyKind::Kinematic);
        assert_eq!(desc.gravity_scale, 0.0);
    }

    #[test]
    fn test_shape_area() {
        let rect = Shape::Rect {
            half_extents: Vec2::new(1.0, 2.0),
        };
        assert!((rect.area() - 8.0).abs() < 1e-6);
        let circle = Shape::Circle { radius: 1.0 };
        assert!((circle.area() - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_only_npcs_and_poops_are_transient() {
        assert!(ActorKind::Npc.is_transient());
        assert!(ActorKind::Poop.is_transient());
        assert!(!ActorKind::Ground.is_transient());
        assert!(!ActorKind::Bird.is_transient());
    }
}
