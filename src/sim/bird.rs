//! Player-actor controller: flight and the poop charge system
//!
//! Flight is level-triggered: while the fly flag is set an upward force is
//! applied every frame, otherwise gravity alone acts. Poop requests are
//! latched until the next update and then either honored or dropped.

use glam::Vec2;

use super::actor::{ActorId, ActorKind};
use super::physics::PhysicsWorld;
use super::registry::BodyRegistry;
use crate::tuning::Tuning;

/// Flight intent and poop charge state of the bird
#[derive(Debug, Clone)]
pub struct BirdController {
    actor: Option<ActorId>,
    flying: bool,
    poop_requested: bool,
    /// Seconds since the last successful poop
    time_since_last_poop: f32,
    /// Remaining charges, within `[0, max_poops]`
    poops_left: u32,
    regen_timer: f32,
}

impl BirdController {
    /// Fully charged and ready to poop
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            actor: None,
            flying: false,
            poop_requested: false,
            time_since_last_poop: tuning.poop_duration,
            poops_left: tuning.max_poops,
            regen_timer: 0.0,
        }
    }

    /// Register the bird's body at its start position
    ///
    /// The bird never inherits the scroll; it stays put while the world moves.
    pub fn spawn<W: PhysicsWorld>(&mut self, registry: &mut BodyRegistry<W>, tuning: &Tuning) -> ActorId {
        let (id, _) = registry.add_to_world(ActorKind::Bird, tuning, tuning.bird_start(), false);
        self.actor = Some(id);
        id
    }

    pub fn actor(&self) -> Option<ActorId> {
        self.actor
    }

    pub fn set_flying(&mut self, flying: bool) {
        self.flying = flying;
    }

    pub fn request_poop(&mut self) {
        self.poop_requested = true;
    }

    pub fn poops_left(&self) -> u32 {
        self.poops_left
    }

    pub fn time_since_last_poop(&self) -> f32 {
        self.time_since_last_poop
    }

    /// Cooldown elapsed and at least one charge left
    pub fn can_poop(&self, tuning: &Tuning) -> bool {
        self.poops_left > 0 && self.time_since_last_poop >= tuning.poop_duration
    }

    /// Pin the bird horizontally, keep it under the ceiling and apply lift
    ///
    /// With `autopilot` the bird ignores the fly flag and hovers around
    /// `demo_hover_height` instead.
    pub fn update_flight<W: PhysicsWorld>(
        &mut self,
        registry: &mut BodyRegistry<W>,
        tuning: &Tuning,
        autopilot: bool,
    ) {
        let Some(id) = self.actor else {
            return;
        };
        let Some(body) = registry.body(id) else {
            return;
        };
        let (Some(mut pos), Some(mut vel)) = (registry.position(id), registry.velocity(id)) else {
            return;
        };

        pos.x = tuning.bird_x;
        vel.x = 0.0;
        let ceiling = tuning.view_height - tuning.bird_radius;
        if pos.y > ceiling {
            pos.y = ceiling;
            vel.y = vel.y.min(0.0);
        }
        registry.set_position(id, pos);
        registry.set_velocity(id, vel);

        let flying = if autopilot {
            pos.y < tuning.demo_hover_height
        } else {
            self.flying
        };
        if flying {
            let mass = registry.world.mass(body).unwrap_or(1.0);
            registry
                .world
                .apply_force(body, Vec2::new(0.0, mass * tuning.bird_flight_accel));
        }
    }

    /// Consume the latched poop request and spawn a projectile if allowed
    ///
    /// The projectile starts at the bird with the bird's vertical velocity
    /// plus a downward kick, so it drops instead of teleporting to a fixed
    /// speed. Horizontally it joins the scroll like every other non-bird body.
    pub fn try_poop<W: PhysicsWorld>(
        &mut self,
        registry: &mut BodyRegistry<W>,
        tuning: &Tuning,
    ) -> Option<ActorId> {
        if !std::mem::take(&mut self.poop_requested) {
            return None;
        }
        if !self.can_poop(tuning) {
            log::debug!(
                "poop rejected: {} left, {:.2}s since last",
                self.poops_left,
                self.time_since_last_poop
            );
            return None;
        }
        let bird = self.actor?;
        let pos = registry.position(bird)?;
        let vy = registry.velocity(bird).map_or(0.0, |v| v.y);

        let (poop, _) = registry.add_to_world(ActorKind::Poop, tuning, pos, true);
        let vx = registry.scroll_velocity().x;
        registry.set_velocity(poop, Vec2::new(vx, vy - tuning.poop_downward_velocity));

        self.poops_left -= 1;
        self.time_since_last_poop = 0.0;
        log::debug!("poop {:?} dropped, {} left", poop, self.poops_left);
        Some(poop)
    }

    /// Advance the cooldown timer and, if enabled, regenerate charges
    pub fn advance(&mut self, dt: f32, tuning: &Tuning, regenerate: bool) {
        self.time_since_last_poop += dt;

        if !regenerate || tuning.poop_regen_interval <= 0.0 {
            return;
        }
        if self.poops_left >= tuning.max_poops {
            self.regen_timer = 0.0;
            return;
        }
        self.regen_timer += dt;
        while self.regen_timer >= tuning.poop_regen_interval && self.poops_left < tuning.max_poops {
            self.regen_timer -= tuning.poop_regen_interval;
            self.poops_left += 1;
        }
        if self.poops_left >= tuning.max_poops {
            self.regen_timer = 0.0;
        }
    }
}
