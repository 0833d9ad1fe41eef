//! Scroll controller
//!
//! The camera never moves. Forward flight is faked by giving every body except
//! the bird the same leftward velocity. Only the horizontal component is
//! touched so falling bodies keep their vertical motion.

use glam::Vec2;

use super::actor::ActorId;
use super::physics::PhysicsWorld;
use super::registry::BodyRegistry;

impl<W: PhysicsWorld> BodyRegistry<W> {
    /// Current scroll speed (m/s, leftward)
    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed
    }

    /// Velocity a scrolling body gets from the world
    pub fn scroll_velocity(&self) -> Vec2 {
        Vec2::new(-self.scroll_speed, 0.0)
    }

    /// Reset the scroll speed without touching existing bodies
    pub(crate) fn reset_scroll_speed(&mut self, speed: f32) {
        self.scroll_speed = speed;
    }

    /// Add `delta` (may be negative) to the scroll speed and push the new
    /// horizontal velocity to every body except `exempt`
    pub fn increase_scroll_speed(&mut self, delta: f32, exempt: Option<ActorId>) {
        self.scroll_speed += delta;
        let vx = -self.scroll_speed;

        let targets: Vec<ActorId> = self
            .actors()
            .map(|a| a.id)
            .filter(|id| Some(*id) != exempt)
            .collect();
        for id in targets {
            if let Some(v) = self.velocity(id) {
                self.set_velocity(id, Vec2::new(vx, v.y));
            }
        }
        log::debug!("scroll speed now {:.2} m/s", self.scroll_speed);
    }
}
