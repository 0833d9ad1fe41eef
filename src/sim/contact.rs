//! Contact and scoring resolver
//!
//! Runs once per frame after the physics step, on the contact list the step
//! produced. Removal happens here, never inside the step, so no body vanishes
//! while the world is iterating.

use super::actor::{Actor, ActorId, ActorKind};
use super::physics::{Contact, PhysicsWorld};
use super::registry::BodyRegistry;
use crate::tuning::Tuning;

/// What one frame's contacts amounted to
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactOutcome {
    /// Poop/NPC pairs resolved this frame
    pub hits: u32,
    /// Actors removed by hits
    pub removed: Vec<Actor>,
    /// The bird touched an NPC that survived the frame
    pub bird_hit: bool,
}

fn pair_of<W: PhysicsWorld>(registry: &BodyRegistry<W>, contact: &Contact) -> Option<(Actor, Actor)> {
    Some((registry.owner(contact.a)?, registry.owner(contact.b)?))
}

/// Score poop/NPC contacts, then check the bird against what is left
pub fn resolve_contacts<W: PhysicsWorld>(
    registry: &mut BodyRegistry<W>,
    contacts: &[Contact],
    bird: Option<ActorId>,
) -> ContactOutcome {
    let mut outcome = ContactOutcome::default();

    for contact in contacts {
        // Either side may already be gone from an earlier pair this frame
        let Some((a, b)) = pair_of(registry, contact) else {
            continue;
        };
        let (poop, npc) = match (a.kind, b.kind) {
            (ActorKind::Poop, ActorKind::Npc) => (a, b),
            (ActorKind::Npc, ActorKind::Poop) => (b, a),
            _ => continue,
        };
        registry.remove(poop.id);
        registry.remove(npc.id);
        outcome.hits += 1;
        outcome.removed.push(poop);
        outcome.removed.push(npc);
        log::debug!("poop {:?} hit npc {:?}", poop.id, npc.id);
    }

    if let Some(bird) = bird {
        outcome.bird_hit = contacts.iter().any(|contact| {
            pair_of(registry, contact).is_some_and(|(a, b)| {
                (a.id == bird && b.kind == ActorKind::Npc) || (b.id == bird && a.kind == ActorKind::Npc)
            })
        });
    }

    outcome
}

/// Remove NPCs and poops that left the field to the left or bottom
pub fn cull_departed<W: PhysicsWorld>(registry: &mut BodyRegistry<W>, tuning: &Tuning) -> Vec<Actor> {
    let margin = tuning.recycle_margin;
    let departed: Vec<Actor> = registry
        .views()
        .filter(|(actor, _)| actor.kind.is_transient())
        .filter(|(_, body)| {
            let half = body.shape.half_extents();
            body.position.x + half.x < -margin || body.position.y + half.y < -margin
        })
        .map(|(actor, _)| actor)
        .collect();

    for actor in &departed {
        registry.remove(actor.id);
        log::debug!("{:?} {:?} left the field", actor.kind, actor.id);
    }
    departed
}
