//! Body registry: the single owner of the physics world and of the
//! actor ↔ body association
//!
//! Actors are keyed by [`ActorId`]; nothing outside holds a body reference
//! that could dangle once an actor is removed mid-frame.

use std::collections::{BTreeMap, HashMap};

use glam::Vec2;

use super::actor::{Actor, ActorId, ActorKind};
use super::physics::{BodyDef, BodyHandle, BodyView, PhysicsWorld};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy)]
struct Entry {
    actor: Actor,
    body: BodyHandle,
}

/// Owns the physics world and maps actors to their bodies
#[derive(Debug)]
pub struct BodyRegistry<W: PhysicsWorld> {
    pub(crate) world: W,
    /// Sorted by id for deterministic iteration
    entries: BTreeMap<ActorId, Entry>,
    owners: HashMap<BodyHandle, ActorId>,
    /// Leftward speed of everything except the bird (m/s)
    pub(crate) scroll_speed: f32,
    next_id: u32,
}

impl<W: PhysicsWorld> BodyRegistry<W> {
    pub fn new(world: W, scroll_speed: f32) -> Self {
        Self {
            world,
            entries: BTreeMap::new(),
            owners: HashMap::new(),
            scroll_speed,
            next_id: 1,
        }
    }

    /// Build a body for a new actor of `kind` and register it
    ///
    /// With `inherit_scroll` the body starts moving left at the current
    /// scroll speed, otherwise it starts at rest.
    pub fn add_to_world(
        &mut self,
        kind: ActorKind,
        tuning: &Tuning,
        position: Vec2,
        inherit_scroll: bool,
    ) -> (ActorId, BodyHandle) {
        let desc = kind.physical(tuning);
        let velocity = if inherit_scroll {
            self.scroll_velocity()
        } else {
            Vec2::ZERO
        };
        let body = self.world.create_body(&BodyDef {
            kind: desc.body_kind,
            shape: desc.shape,
            position,
            velocity,
            density: desc.density,
            friction: desc.friction,
            gravity_scale: desc.gravity_scale,
        });

        let id = ActorId(self.next_id);
        self.next_id += 1;
        self.entries.insert(
            id,
            Entry {
                actor: Actor { id, kind },
                body,
            },
        );
        self.owners.insert(body, id);
        (id, body)
    }

    /// Body of a registered actor, `None` if it is not in the world
    pub fn body(&self, id: ActorId) -> Option<BodyHandle> {
        self.entries.get(&id).map(|e| e.body)
    }

    pub fn actor(&self, id: ActorId) -> Option<Actor> {
        self.entries.get(&id).map(|e| e.actor)
    }

    /// Actor owning a body
    pub fn owner(&self, body: BodyHandle) -> Option<Actor> {
        self.owners.get(&body).and_then(|id| self.actor(*id))
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Destroy the actor's body and forget the association
    ///
    /// Owners of actor lists (ground strip, bird slot) must drop the id too.
    pub fn remove(&mut self, id: ActorId) -> bool {
        let Some(entry) = self.entries.remove(&id) else {
            return false;
        };
        self.owners.remove(&entry.body);
        self.world.destroy_body(entry.body);
        true
    }

    /// Remove every actor and body
    pub fn clear(&mut self) {
        let ids: Vec<ActorId> = self.entries.keys().copied().collect();
        for id in ids {
            self.remove(id);
        }
    }

    pub fn position(&self, id: ActorId) -> Option<Vec2> {
        self.body(id).and_then(|b| self.world.position(b))
    }

    pub fn velocity(&self, id: ActorId) -> Option<Vec2> {
        self.body(id).and_then(|b| self.world.velocity(b))
    }

    pub fn set_position(&mut self, id: ActorId, position: Vec2) {
        if let Some(body) = self.body(id) {
            self.world.set_position(body, position);
        }
    }

    pub fn set_velocity(&mut self, id: ActorId, velocity: Vec2) {
        if let Some(body) = self.body(id) {
            self.world.set_velocity(body, velocity);
        }
    }

    /// Registered actors in id order
    pub fn actors(&self) -> impl Iterator<Item = Actor> + '_ {
        self.entries.values().map(|e| e.actor)
    }

    /// Registered actors paired with a view of their body
    pub fn views(&self) -> impl Iterator<Item = (Actor, BodyView)> + '_ {
        self.entries
            .values()
            .filter_map(|e| self.world.body(e.body).map(|view| (e.actor, view)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn world(&self) -> &W {
        &self.world
    }
}
