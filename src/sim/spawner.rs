//! Adversary spawner
//!
//! Timer based. NPCs appear just beyond the right edge, standing on the
//! ground, and walk into view at the scroll speed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::actor::{ActorId, ActorKind};
use super::physics::PhysicsWorld;
use super::registry::BodyRegistry;
use crate::tuning::Tuning;

/// Minimum gap between two spawns, whatever the jitter rolls
const MIN_SPAWN_GAP: f32 = 0.25;

#[derive(Debug, Clone)]
pub struct NpcSpawner {
    rng: Pcg32,
    timer: f32,
    /// Seconds until the next spawn, rolled after every spawn
    next_in: f32,
}

impl NpcSpawner {
    pub fn new(tuning: &Tuning) -> Self {
        let mut spawner = Self {
            rng: Pcg32::seed_from_u64(tuning.seed),
            timer: 0.0,
            next_in: tuning.spawn_interval,
        };
        spawner.next_in = spawner.roll_interval(tuning);
        spawner
    }

    fn roll_interval(&mut self, tuning: &Tuning) -> f32 {
        let half = tuning.spawn_jitter / 2.0;
        let jitter = if half > 0.0 {
            self.rng.random_range(-half..=half)
        } else {
            0.0
        };
        (tuning.spawn_interval + jitter).max(MIN_SPAWN_GAP)
    }

    /// Advance the timer, spawning at most one NPC per call
    pub fn tick<W: PhysicsWorld>(
        &mut self,
        dt: f32,
        registry: &mut BodyRegistry<W>,
        tuning: &Tuning,
    ) -> Option<ActorId> {
        self.timer += dt;
        if self.timer < self.next_in {
            return None;
        }
        // Keep the remainder but never queue a burst after a long frame
        self.timer = (self.timer - self.next_in).min(tuning.spawn_interval);
        self.next_in = self.roll_interval(tuning);
        Some(spawn_npc(registry, tuning))
    }
}

/// Where a fresh NPC enters: past the right edge, feet on the ground
pub fn spawn_position(tuning: &Tuning) -> Vec2 {
    Vec2::new(
        tuning.view_width + tuning.npc_half_width + tuning.spawn_margin,
        tuning.ground_top() + tuning.npc_half_height,
    )
}

/// Register an NPC at the leading edge, moving with the world
pub fn spawn_npc<W: PhysicsWorld>(registry: &mut BodyRegistry<W>, tuning: &Tuning) -> ActorId {
    spawn_npc_at(registry, tuning, spawn_position(tuning))
}

pub fn spawn_npc_at<W: PhysicsWorld>(
    registry: &mut BodyRegistry<W>,
    tuning: &Tuning,
    position: Vec2,
) -> ActorId {
    let (id, _) = registry.add_to_world(ActorKind::Npc, tuning, position, true);
    log::debug!("npc {:?} spawned at x={:.2}", id, position.x);
    id
}
