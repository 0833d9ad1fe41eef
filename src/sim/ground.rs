//! Ground recycler
//!
//! A fixed number of segments laid end to end. Whenever the leftmost one has
//! scrolled fully past the left edge (plus a margin so nothing pops), it is
//! moved to abut the rightmost one. Segments are never created or destroyed
//! after layout.

use std::collections::VecDeque;

use glam::Vec2;

use super::actor::{ActorId, ActorKind};
use super::physics::PhysicsWorld;
use super::registry::BodyRegistry;
use crate::tuning::Tuning;

/// Ground segments ordered left to right
#[derive(Debug, Clone, Default)]
pub struct GroundStrip {
    segments: VecDeque<ActorId>,
    segment_width: f32,
}

impl GroundStrip {
    /// Register `num_grounds` segments starting at the left edge of the view
    pub fn lay_out<W: PhysicsWorld>(registry: &mut BodyRegistry<W>, tuning: &Tuning) -> Self {
        let width = tuning.ground_width;
        let y = tuning.ground_top() - tuning.ground_height / 2.0;

        let segments = (0..tuning.num_grounds)
            .map(|i| {
                let x = i as f32 * width + width / 2.0;
                let (id, _) = registry.add_to_world(ActorKind::Ground, tuning, Vec2::new(x, y), true);
                id
            })
            .collect();

        Self {
            segments,
            segment_width: width,
        }
    }

    /// Move every segment that left the screen to the right end of the strip
    ///
    /// Returns the number of segments moved. Only the leftmost segment can
    /// qualify at a time, so this is O(1) per frame unless `dt` was huge.
    pub fn recycle<W: PhysicsWorld>(&mut self, registry: &mut BodyRegistry<W>, margin: f32) -> usize {
        let half = self.segment_width / 2.0;
        let mut moved = 0;

        while moved < self.segments.len() {
            let (Some(&front), Some(&back)) = (self.segments.front(), self.segments.back()) else {
                break;
            };
            let (Some(front_pos), Some(back_pos)) = (registry.position(front), registry.position(back))
            else {
                break;
            };
            if front_pos.x + half >= -margin {
                break;
            }

            let target = Vec2::new(back_pos.x + self.segment_width, front_pos.y);
            registry.set_position(front, target);
            let velocity = registry.scroll_velocity();
            registry.set_velocity(front, velocity);
            self.segments.rotate_left(1);
            moved += 1;
            log::debug!("ground {:?} recycled to x={:.2}", front, target.x);
        }
        moved
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment ids, leftmost first
    pub fn segments(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.segments.iter().copied()
    }

    pub fn leftmost(&self) -> Option<ActorId> {
        self.segments.front().copied()
    }

    pub fn rightmost(&self) -> Option<ActorId> {
        self.segments.back().copied()
    }
}
